//! Centsible is a backend for managing your budget and personal finances.
//!
//! This library provides a JSON REST API for recording financial
//! transactions, organising them into categories and subcategories with
//! budget allocations, and tracking savings accounts, backed by a local
//! SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod endpoints;
pub mod models;
pub mod stores;

mod db;
mod error;
mod logging;
mod routes;
mod routing;
mod state;

pub use db::initialize as initialize_db;
pub use error::{Error, ErrorBody};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::{DEFAULT_ALLOWED_ORIGIN, build_router};
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
