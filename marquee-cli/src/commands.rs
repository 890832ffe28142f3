//! CLI command implementations

use clap::Subcommand;
use marquee_core::config::MarqueeConfig;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};
use marquee_core::{MarqueeError, Result, RuntimeMode};
use marquee_web::routes::ROUTE_TABLE;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Runtime mode (production or development)
        #[arg(long, default_value = "development")]
        mode: RuntimeMode,
        /// Console log level
        #[arg(long, default_value = "info")]
        log_level: CliLogLevel,
    },
    /// Print the route table
    Routes,
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            mode,
            log_level,
        } => serve(host, port, mode, log_level).await,
        Commands::Routes => {
            print_routes();
            Ok(())
        }
    }
}

/// Start the web server with the given bind address and mode
async fn serve(host: String, port: u16, mode: RuntimeMode, log_level: CliLogLevel) -> Result<()> {
    init_tracing(log_level.as_tracing_level(), None).map_err(|e| MarqueeError::Configuration {
        reason: format!("tracing setup failed: {e}"),
    })?;

    let mut config = MarqueeConfig::default();
    config.server.bind_host = host;
    config.server.bind_port = port;

    marquee_web::run_server(config, mode).await
}

/// Print every registered route with its title and component
fn print_routes() {
    println!("{:<42} {:<22} COMPONENT", "PATH", "TITLE");
    for binding in ROUTE_TABLE {
        let title = binding.metadata.map(|m| m.title).unwrap_or("-");
        println!(
            "{:<42} {:<22} {:?}",
            binding.path, title, binding.component
        );
    }
}
