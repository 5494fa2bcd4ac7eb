//! Implements a struct that holds the state shared by the request handlers.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, config::FeatureFlags, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Toggles for the mutating endpoints, fixed at startup.
    pub feature_flags: FeatureFlags,

    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, feature_flags: FeatureFlags) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            feature_flags,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
