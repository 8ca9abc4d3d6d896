use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn init_logging() {
    init_logging_default();
}

/// Mirrors the original policy: any origin, any method, any header.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(error = %e, "no usable config file, falling back to env vars");
            None
        }
    };

    // DB connection: pooled via config when available
    let db = match cfg.as_ref() {
        Some(cfg) => models::db::connect_with(&cfg.database).await?,
        None => models::db::connect().await?,
    };

    let docs_enabled = cfg.as_ref().map(|c| c.docs.enabled).unwrap_or(true);
    let state = ServerState { db };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, docs_enabled, state);

    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, docs_enabled, "starting todo api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
