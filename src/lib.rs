//! Spendtrack is a small web service for tracking personal income and
//! expenses.
//!
//! The service exposes spenders and their transactions as JSON resources
//! backed by a SQLite database, and derives an income/expense/balance
//! summary for each spender on demand. Mutating endpoints can be switched
//! off with feature flags without removing their routes.
//!
//! This library provides the router, the shared app state and the domain
//! logic; the `spendtrack` binary wires them to a TCP listener.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod config;
pub mod db;
pub mod endpoints;
pub mod pagination;
pub mod spender;
pub mod summary;
pub mod transaction;

mod app_state;
mod error;
mod routing;

pub use app_state::AppState;
pub use error::Error;
pub use routing::build_router;

/// Parse a path id parameter, rejecting non-integer values.
pub(crate) fn parse_id(raw: &str) -> Result<i64, Error> {
    raw.parse()
        .map_err(|_| Error::BadRequest(format!("id \"{raw}\" must be an integer")))
}

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
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
