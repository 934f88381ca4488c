//! userctl CLI - runs the users HTTP API
//!
//! Configuration comes from flags, the environment, and an optional `.env`
//! file in the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userctl",
    author,
    version,
    about = "HTTP CRUD API over a PostgreSQL users table"
)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load but don't fail if .env is missing
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["userctl", "serve", "--database-url", "postgres://db/users"])
            .unwrap();
        let Commands::Serve(args) = cli.command;

        assert_eq!(args.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(args.max_connections, 5);
        assert_eq!(args.database_url.as_deref(), Some("postgres://db/users"));
        assert!(!cli.debug);
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from([
            "userctl",
            "serve",
            "--debug",
            "--bind",
            "0.0.0.0:9000",
            "--max-connections",
            "12",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command;

        assert!(cli.debug);
        assert_eq!(args.bind.port(), 9000);
        assert_eq!(args.max_connections, 12);
    }
}
