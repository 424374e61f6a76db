use std::{env, net::SocketAddr, process};

use anyhow::Result;
use triorelevan_config::Config;
use triorelevan_server::{AppState, SearchBackend, router};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("triorelevan-server starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let mut config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Optional bind address argument overrides the config file
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {}
        2 => match args[1].parse::<SocketAddr>() {
            Ok(bind) => config.server.bind = bind,
            Err(e) => {
                eprintln!("Error: Invalid bind address '{}': {e}", args[1]);
                eprintln!("Usage: {} [bind-addr]", args[0]);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [bind-addr]", args[0]);
            process::exit(1);
        }
    }

    let backend = SearchBackend::from_config(&config.backend)?;
    match &backend {
        SearchBackend::Remote(remote) => {
            log::info!("Forwarding searches to {}", remote.base_url())
        }
        SearchBackend::Mock => log::info!("Serving mock search results"),
    }

    let app = router(AppState::new(backend, &config));

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    log::info!("HTTP server listening on {}", config.server.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
