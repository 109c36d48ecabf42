use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmbrain",
    version,
    about = "Crop advisory and soil analysis for Indian agriculture"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text (overrides the config file)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a crop advisory for a crop and soil profile
    Advise {
        /// Crop name (e.g. rice, wheat)
        #[arg(long)]
        crop: String,

        /// JSON file with the soil profile
        #[arg(long)]
        soil: PathBuf,

        /// Optional JSON file with current weather
        #[arg(long)]
        weather: Option<PathBuf>,
    },
    /// List crops in the catalog
    Crops {
        /// Filter by season: kharif, rabi, zaid
        #[arg(long)]
        season: Option<String>,

        /// Filter by compatible soil type
        #[arg(long)]
        soil_type: Option<String>,
    },
    /// Analyse a soil profile and list suitable crops
    Soil {
        /// JSON file with the soil profile
        #[arg(long)]
        soil: PathBuf,
    },
    /// List the risk alert rules
    Rules,
}
