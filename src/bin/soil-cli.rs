use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use soil_health_relay::soil::SoilSample;

#[derive(Parser)]
#[command(name = "soil-cli")]
#[command(about = "Submit soil samples to a running soil-health-relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a soil health prediction
    Predict(PredictArgs),
}

#[derive(Args)]
struct PredictArgs {
    /// Read the sample from a JSON file instead of flags
    #[arg(short, long, conflicts_with_all = ["saturation", "organic_carbon", "soil_ph", "nitrogen_level", "phosphorus_level", "potassium_level", "salinity", "oxygen_level"])]
    file: Option<PathBuf>,

    #[arg(long, required_unless_present = "file")]
    saturation: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    organic_carbon: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    soil_ph: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    nitrogen_level: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    phosphorus_level: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    potassium_level: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    salinity: Option<f64>,
    #[arg(long, required_unless_present = "file")]
    oxygen_level: Option<f64>,
}

impl PredictArgs {
    fn sample(&self) -> Result<SoilSample, Box<dyn std::error::Error>> {
        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&content)?);
        }

        let field = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| format!("missing --{}", name))
        };
        Ok(SoilSample::new(
            field(self.saturation, "saturation")?,
            field(self.organic_carbon, "organic-carbon")?,
            field(self.soil_ph, "soil-ph")?,
            field(self.nitrogen_level, "nitrogen-level")?,
            field(self.phosphorus_level, "phosphorus-level")?,
            field(self.potassium_level, "potassium-level")?,
            field(self.salinity, "salinity")?,
            field(self.oxygen_level, "oxygen-level")?,
        ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Predict(args) => {
            let sample = args.sample()?;
            let res = client
                .post(format!("{}/soil-health/predict", cli.url.trim_end_matches('/')))
                .json(&sample)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(format!("relay returned status {}: {}", status, text).into());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
