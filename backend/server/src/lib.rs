//! Address selector service for the employment portal.
//!
//! Serves the cascading Region > Province > Municipality > Barangay option lists from a
//! static dataset loaded once at startup, applies selector changes, and forwards saves
//! to the address record backend on behalf of the calling user.
//!
//!
//!
//! # Routes
//!
//! Option lists, unknown or missing ancestors give `[]`.
//! - `GET /regions`
//! - `GET /provinces?region=`
//! - `GET /municipalities?region=&province=`
//! - `GET /barangays?region=&province=&municipality=`
//!
//! Selection.
//! - `POST /address/options`: selection in, all four option lists out
//! - `POST /address/change`: `{ selection, level, value }` in, next selection out
//!
//! Records, all need `Authorization: Bearer <token>`.
//! - `GET /addresses/user/{user_id}`
//! - `POST /addresses`: `{ selection, addressType }`
//! - `PUT /addresses/{id}`: `{ selection, addressType }`
//! - `DELETE /addresses/{id}`
//!
//!
//!
//! # Environment
//!
//! - `RUST_PORT`: listen port, default `1111`
//! - `DIVISIONS_PATH`: dataset file, default `../divisions.json`
//! - `DIVISIONS_URL`: fetch the dataset from here instead of disk
//! - `RECORDS_URL`: address record backend, default `http://localhost:8080`
//! - `/run/secrets/RECORDS_API_KEY`: optional key for the record backend
//! - `RUST_LOG`: tracing filter
//!
//!
//!
//! # Dataset
//!
//! Build the dataset file from a raw export.
//! ```sh
//! cargo run -p process -- raw.json divisions.json
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post, put},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod records;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    barangays_handler, change_handler, create_address_handler, delete_address_handler,
    fetch_addresses_handler, municipalities_handler, options_handler, provinces_handler,
    regions_handler, update_address_handler,
};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/regions", get(regions_handler))
        .route("/provinces", get(provinces_handler))
        .route("/municipalities", get(municipalities_handler))
        .route("/barangays", get(barangays_handler))
        .route("/address/options", post(options_handler))
        .route("/address/change", post(change_handler))
        .route("/addresses", post(create_address_handler))
        .route("/addresses/user/{user_id}", get(fetch_addresses_handler))
        .route(
            "/addresses/{id}",
            put(update_address_handler).delete(delete_address_handler),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config).await?;

    if state.tree.is_empty() {
        warn!("Starting with no divisions, only free text entry will work");
    }

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => warn!("Failed to install Ctrl+C handler: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
