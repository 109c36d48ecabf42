mod cli;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use farmbrain::config::{Config, OutputFormat};
use farmbrain::{
    AdvisoryComposer, Catalog, CropRecord, FarmBrainError, Result, SoilEvaluator, SoilSample,
    WeatherObservation,
};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let catalog = config.catalog();

    let rendered = match cli.command {
        Commands::Advise {
            crop,
            soil,
            weather,
        } => {
            let crop = find_crop(&catalog, &crop)?;
            let soil: SoilSample = read_json(&soil)?;
            let weather: Option<WeatherObservation> =
                weather.as_deref().map(read_json::<WeatherObservation>).transpose()?;

            let advisory = AdvisoryComposer::new().advise(crop, &soil, weather.as_ref());
            match output {
                OutputFormat::Json => serde_json::to_string_pretty(&advisory)?,
                OutputFormat::Text => report::advisory_text(&advisory),
            }
        }
        Commands::Crops { season, soil_type } => {
            let mut crops: Vec<&CropRecord> = match season.as_deref() {
                Some(s) => catalog.by_season(s),
                None => catalog.all().iter().collect(),
            };
            if let Some(soil_type) = soil_type.as_deref() {
                crops.retain(|c| c.grows_in(soil_type));
            }
            match output {
                OutputFormat::Json => serde_json::to_string_pretty(&crops)?,
                OutputFormat::Text => report::crops_text(&crops),
            }
        }
        Commands::Soil { soil } => {
            let soil: SoilSample = read_json(&soil)?;
            let soil_report = SoilEvaluator.report(&soil, &catalog);
            match output {
                OutputFormat::Json => serde_json::to_string_pretty(&soil_report)?,
                OutputFormat::Text => report::soil_report_text(&soil_report),
            }
        }
        Commands::Rules => {
            let composer = AdvisoryComposer::new();
            let rules = composer.risk_engine().list_rules();
            match output {
                OutputFormat::Json => serde_json::to_string_pretty(&rules)?,
                OutputFormat::Text => report::rules_text(&rules),
            }
        }
    };

    println!("{}", rendered);
    Ok(())
}

fn find_crop<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a CropRecord> {
    catalog.by_name(name).ok_or_else(|| {
        FarmBrainError::NotFound(format!(
            "Crop '{}' not found. Use `farmbrain crops` to see available crops.",
            name
        ))
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}
