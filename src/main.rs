//! Landscaper - capability landscape poster generator
//!
//! Renders a layers-by-domains matrix from a YAML definition into a PNG
//! poster: density-scaled cell colors, wrapped bullet content, thumbnail
//! embedding, and a rotated row legend.

use clap::{Parser, Subcommand};

use landscaper::cli::{CliError, InspectArgs, RenderArgs, ValidateArgs};
use landscaper::constants::APP_BINARY_NAME;

/// Landscaper - capability landscape poster generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a landscape definition to a PNG poster
    Render(RenderArgs),
    /// Validate a landscape definition
    Validate(ValidateArgs),
    /// Summarize the landscape matrix
    Inspect(InspectArgs),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if matches!(&e, CliError::Validation(_)) {
            eprintln!();
            eprintln!("Run `{APP_BINARY_NAME} --help` for usage.");
        }
        std::process::exit(e.exit_code());
    }
}
