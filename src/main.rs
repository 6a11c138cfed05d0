use std::path::PathBuf;

use clap::{Parser, Subcommand};

use recommendarr::app;
use recommendarr::config::Config;

#[derive(Parser, Debug)]
#[command(name = "recommendarr", version, about = "Synthetic catalog generator and content-based recommender")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a synthetic movie/webseries catalog
    Generate {
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        records: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recommend titles similar to a favorite (prompts for anything not given)
    Recommend {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::init() {
        Ok(c) => c,
        Err(e) => {
            app::common::init_logging(&Config::default());
            tracing::error!("Failed to initialize configuration: {e}");
            return;
        }
    };
    app::common::init_logging(&config);

    let command = cli.command.unwrap_or(Command::Recommend { input: None, category: None, title: None });
    let result = match command {
        Command::Generate { output, records, seed } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.generate.output));
            app::generate::run(&output, records.unwrap_or(config.generate.records), seed.or(config.generate.seed))
        }
        Command::Recommend { input, category, title } => {
            let input = input.unwrap_or_else(|| PathBuf::from(&config.recommend.input));
            let preset = app::recommend::Preset { category, title };
            app::recommend::run(&input, &preset, &config)
        }
    };

    if let Err(e) = result {
        tracing::error!("{e}");
    }
}
