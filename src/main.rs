use clap::{Parser, Subcommand};
use std::path::PathBuf;

use polytext_prep::commands;
use polytext_prep::SplitRatios;

// ============ CLI ============
#[derive(Parser)]
#[command(name = "polytext-prep")]
#[command(version = "1.0.0")]
#[command(about = "Multilingual labeled-text preprocessing for classifier training")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean, merge and split the labeled corpora
    Preprocess {
        /// Directory holding marathi.csv, bangla.csv, english.csv, hindi.csv
        #[arg(short, long, default_value = "dataset")]
        data_dir: PathBuf,
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        #[arg(long, default_value = "42")]
        seed: u64,
        #[arg(long, default_value = "0.8")]
        train_ratio: f64,
        #[arg(long, default_value = "0.1")]
        val_ratio: f64,
        #[arg(long, default_value = "0.1")]
        test_ratio: f64,
    },

    /// Report per-source row counts and label distribution
    Stats {
        #[arg(short, long, default_value = "dataset")]
        data_dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Preprocess {
            data_dir,
            output,
            seed,
            train_ratio,
            val_ratio,
            test_ratio,
        } => commands::preprocess::execute(
            &data_dir,
            &output,
            seed,
            SplitRatios {
                train: train_ratio,
                val: val_ratio,
                test: test_ratio,
            },
        ),
        Commands::Stats { data_dir } => commands::stats::execute(&data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
