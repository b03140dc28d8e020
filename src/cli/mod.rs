//! CLI commands
//!
//! Offline training, the inference server, and artifact inspection.

mod info;
mod serve;
mod train;

pub use info::info;
pub use serve::serve;
pub use train::train;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Classr - minimal inference server for a trained tabular classifier
#[derive(Parser)]
#[command(name = "classr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train the classifier on the built-in dataset and save the artifact
    Train {
        /// Artifact output path (default: models/model.bin)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Share of each class held out for evaluation
        #[arg(long, default_value = "0.2")]
        test_size: f64,

        /// Gradient descent iteration cap
        #[arg(long, default_value = "500")]
        max_iter: usize,

        /// Gradient descent step size
        #[arg(long, default_value = "0.1")]
        learning_rate: f64,

        /// Seed for the reproducible train/test split
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Start the inference server
    Serve {
        /// Artifact path (falls back to CLASSR_MODEL_PATH, then models/model.bin)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Show artifact information
    Info {
        /// Artifact path (falls back to CLASSR_MODEL_PATH, then models/model.bin)
        model: Option<PathBuf>,
    },
}
