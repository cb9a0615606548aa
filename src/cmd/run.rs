//! `greeting-relay run` — start the relay server.
//!
//! Initialises logging, builds the shared state around the configured
//! name service, and serves until SIGTERM / Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::{self, RelayConfig};
use crate::error::RelayError;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), RelayError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    // A bad URL is not fatal: every greeting reports it as a 500, and
    // /health stays up so the misconfiguration is visible.
    if let Err(reason) = config::validate_base_url(&args.name_service_url) {
        tracing::warn!(
            name_service = %args.name_service_url,
            reason = %reason,
            "name service URL is invalid, greetings will fail"
        );
    }

    let relay_config = RelayConfig::new(args.name_service_url.clone());
    let name_endpoint = relay_config.name_endpoint();
    let state = Arc::new(AppState::new(relay_config));

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        name_endpoint = %name_endpoint,
        "greeting-relay started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("greeting-relay stopped");
    Ok(())
}
