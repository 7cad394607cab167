use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-reporter")]
#[command(about = "Air-quality index reporter with local estimation fallback")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch readings for a city and report its air quality
    Lookup {
        #[arg(help = "City name to look up")]
        city: String,

        #[arg(long, help = "Provider API key [default: API_NINJAS_KEY env var]")]
        api_key: Option<String>,

        #[arg(long, help = "Override the provider endpoint URL")]
        endpoint: Option<String>,

        #[arg(long, default_value = "false", help = "Print the report as JSON")]
        json: bool,

        #[arg(short, long, help = "Write the JSON report to a file")]
        output: Option<PathBuf>,
    },

    /// Classify a bare AQI value without fetching
    Categorize {
        #[arg(help = "AQI value to classify")]
        aqi: u32,
    },

    /// Estimate AQI from a pollutant concentration
    Estimate {
        #[arg(help = "Concentration in µg/m³")]
        concentration: f64,

        #[arg(long, default_value = "PM2.5", help = "Pollutant identifier")]
        pollutant: String,
    },
}
