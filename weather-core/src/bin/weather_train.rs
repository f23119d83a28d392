//! Offline trainer: CSV weather logs -> JSON parameter files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use weather_core::constants::{
    CLASS_MODEL_FILE, DEFAULT_INPUT_CSV, DEFAULT_MODEL_DIR, TEMP_MODEL_FILE,
};
use weather_core::dataset::{self, Observation};
use weather_core::storage::save_json;
use weather_core::training::{train_classifier, train_temperature};
use weather_core::CoreResult;

#[derive(Parser, Debug)]
#[command(name = "weather-train")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Weather log CSV
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT_CSV)]
    input: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train per-city next-step temperature models
    Temperature {
        #[arg(short, long, default_value_t = default_output(TEMP_MODEL_FILE))]
        output: String,
    },
    /// Train the Gaussian weather classifier
    Classifier {
        #[arg(short, long, default_value_t = default_output(CLASS_MODEL_FILE))]
        output: String,
    },
    /// Train both models into one directory
    All {
        #[arg(long, default_value = DEFAULT_MODEL_DIR)]
        out_dir: PathBuf,
    },
}

fn default_output(file: &str) -> String {
    Path::new(DEFAULT_MODEL_DIR).join(file).display().to_string()
}

fn write_temperature(observations: &[Observation], output: &Path) -> CoreResult<()> {
    let params = train_temperature(observations);
    save_json(&params, output)?;
    log::info!("Saved {} with {} city models", output.display(), params.city_count());
    Ok(())
}

fn write_classifier(observations: &[Observation], output: &Path) -> CoreResult<()> {
    let params = train_classifier(&dataset::labeled(observations));
    save_json(&params, output)?;
    match params.model() {
        Some(model) => log::info!("Saved classifier with {} classes", model.class_count()),
        None => log::info!("Saved disabled classifier to {}", output.display()),
    }
    Ok(())
}

fn run(cli: Cli) -> CoreResult<()> {
    let observations = dataset::read_csv(&cli.input)?;

    match cli.command {
        Commands::Temperature { output } => write_temperature(&observations, Path::new(&output)),
        Commands::Classifier { output } => write_classifier(&observations, Path::new(&output)),
        Commands::All { out_dir } => {
            write_temperature(&observations, &out_dir.join(TEMP_MODEL_FILE))?;
            write_classifier(&observations, &out_dir.join(CLASS_MODEL_FILE))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Training failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
