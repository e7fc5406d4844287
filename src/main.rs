use clap::Parser;
use std::path::PathBuf;

/// CampañaAI - Marketing content generation backend
#[derive(Parser, Debug)]
#[command(name = "campania")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to
    #[arg(long, default_value = "3470")]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Allowed CORS origins (repeatable; all origins allowed when omitted)
    #[arg(long = "cors-origin")]
    cors_origin: Vec<String>,

    /// Path to a TOML config file with the collaborator credentials
    #[arg(long, env = "CAMPANIA_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::init();

    let config = campania::config::load_config(cli.config.as_deref());

    // Create the tokio runtime
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        let state = match campania::server::ServerAppState::new(config) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to initialize state: {}", e);
                std::process::exit(1);
            }
        };

        let cors_origins = if cli.cors_origin.is_empty() {
            None
        } else {
            Some(cli.cors_origin)
        };

        if let Err(e) = campania::server::run_server(cli.port, &cli.bind, state, cors_origins).await
        {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}
