mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rusty-rules")]
#[command(version, about = "Render jQuery-Validation rules for form definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rules script for a form
    Render {
        #[command(flatten)]
        inputs: Inputs,

        /// Render a single field instead of the whole form
        #[arg(short, long)]
        field: Option<String>,
    },

    /// List constraints whose error message cannot be resolved
    Check {
        #[command(flatten)]
        inputs: Inputs,
    },
}

/// Inputs shared by every command
#[derive(Args)]
pub struct Inputs {
    /// Form definition file (TOML)
    #[arg(long)]
    pub form: PathBuf,

    /// Directory holding the `messages` files (overrides the config)
    #[arg(short, long)]
    pub messages: Option<PathBuf>,

    /// Language of the messages to load first, e.g. `fr` for `messages.fr`
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Renderer configuration file [default: ./rules.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { inputs, field } => {
            commands::render::execute(&inputs, field.as_deref())?;
        }
        Commands::Check { inputs } => {
            commands::check::execute(&inputs)?;
        }
    }

    Ok(())
}
