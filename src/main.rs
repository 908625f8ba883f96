//! dtsignals: run discrete-time signal lessons from the command line.

use clap::{Parser, Subcommand};
use dtsignals_lib::domain::{ConfigOverrides, DemoConfig, Lesson, SignalResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dtsignals")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for figure files (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for random test signals (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip text stem plots on the console
    #[arg(long)]
    no_plots: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lessons (all configured lessons when none are named)
    Run {
        /// Lesson names, e.g. `convolution even-odd`
        lessons: Vec<Lesson>,
    },

    /// List available lessons
    List,
}

fn build_config(cli: &Cli, lessons: Vec<Lesson>) -> SignalResult<DemoConfig> {
    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    Ok(config.with_overrides(ConfigOverrides {
        output_dir: cli.output.clone(),
        seed: cli.seed,
        no_plots: cli.no_plots,
        lessons,
    }))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let lessons = match &cli.command {
        Some(Commands::List) => {
            for lesson in Lesson::ALL {
                println!("{lesson}");
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Run { lessons }) => lessons.clone(),
        None => Vec::new(),
    };

    let result = build_config(&cli, lessons).and_then(|config| dtsignals_lib::run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
