use bff_server::common::logger::init_logger_with_file;
use bff_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv)
    setup_environment();

    // 2. Load configuration, then logging
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();

    tracing::info!(
        upstream = %config.upstream_base_url,
        port = config.http_port,
        "SportHub BFF starting..."
    );

    // 3. Initialize server state (configured upstream client)
    let state = ServerState::initialize(&config);

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
