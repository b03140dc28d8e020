use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classr::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classr=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            output,
            test_size,
            max_iter,
            learning_rate,
            seed,
        } => {
            classr::cli::train(output, test_size, max_iter, learning_rate, seed)?;
        }
        Commands::Serve { model, port, host } => {
            classr::cli::serve(model, port, host).await?;
        }
        Commands::Info { model } => {
            classr::cli::info(model)?;
        }
    }

    Ok(())
}
