use tracing_subscriber::EnvFilter;

use crate::analyzers::{categorize, health_advisory, HealthAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::error::{AqiError, Result};
use crate::fetchers::{resolve_api_key, AirQualityClient};
use crate::processors::breakpoints::{breakpoints_for, estimate_aqi};
use crate::readers::{canonical_pollutant_name, PayloadReader};
use crate::utils::progress::ProgressReporter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Lookup {
            city,
            api_key,
            endpoint,
            json,
            output,
        } => {
            let api_key = resolve_api_key(api_key)?;
            let mut client = AirQualityClient::new(api_key)?;
            if let Some(url) = endpoint {
                client = client.with_base_url(url);
            }

            let progress =
                ProgressReporter::new_spinner(&format!("Fetching readings for {}...", city), json);

            let payload = match client.fetch_city(&city).await {
                Ok(payload) => payload,
                Err(e) => {
                    progress.finish_and_clear();
                    return Err(e);
                }
            };
            progress.finish_and_clear();

            let readings = PayloadReader::new().read_payload(&payload);
            let report = HealthAnalyzer::new().analyze(&readings).with_city(city);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.detailed_summary());
            }

            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                println!("\nReport written to {}", path.display());
            }
        }

        Commands::Categorize { aqi } => {
            let category = categorize(aqi);
            println!("AQI: {}", aqi);
            println!("Category: {}", category);
            println!("Advisory: {}", health_advisory(category));
        }

        Commands::Estimate {
            concentration,
            pollutant,
        } => {
            let name = canonical_pollutant_name(&pollutant);
            let table = breakpoints_for(&name).ok_or_else(|| {
                AqiError::Config(format!(
                    "No breakpoint table for '{}'; tables exist for PM2.5 and PM10",
                    name
                ))
            })?;

            let aqi = estimate_aqi(concentration, table);
            let category = categorize(aqi);
            println!("{} at {} µg/m³", name, concentration);
            println!("Estimated AQI: {}", aqi);
            println!("Category: {}", category);
            println!("Advisory: {}", health_advisory(category));
        }
    }

    Ok(())
}
