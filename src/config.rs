//! Feature flag configuration for the mutating endpoints.
//!
//! Flags are read once from the environment at startup and injected into the
//! app state. They never change for the lifetime of the process, so handlers
//! can consult them without any locking.

use std::env;

/// A mutating operation that can be switched off with a feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// POST /spenders
    CreateSpender,
    /// PUT /spenders/{id}
    UpdateSpender,
    /// POST /transactions
    CreateTransaction,
    /// PUT /transactions/{id}
    UpdateTransaction,
}

/// Static per-operation toggles.
///
/// A disabled operation keeps its route but rejects every request with 403
/// before the request body is validated and before the store is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Allow creating spenders.
    pub enable_create_spender: bool,
    /// Allow updating spenders.
    pub enable_update_spender: bool,
    /// Allow creating transactions.
    pub enable_create_transaction: bool,
    /// Allow updating transactions.
    pub enable_update_transaction: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_create_spender: true,
            enable_update_spender: true,
            enable_create_transaction: true,
            enable_update_transaction: true,
        }
    }
}

impl FeatureFlags {
    /// Read the flags from the environment variables `ENABLE_CREATE_SPENDER`,
    /// `ENABLE_UPDATE_SPENDER`, `ENABLE_CREATE_TRANSACTION` and
    /// `ENABLE_UPDATE_TRANSACTION`.
    ///
    /// A missing or unparsable variable leaves its flag enabled.
    pub fn from_env() -> Self {
        Self {
            enable_create_spender: flag_from_env("ENABLE_CREATE_SPENDER"),
            enable_update_spender: flag_from_env("ENABLE_UPDATE_SPENDER"),
            enable_create_transaction: flag_from_env("ENABLE_CREATE_TRANSACTION"),
            enable_update_transaction: flag_from_env("ENABLE_UPDATE_TRANSACTION"),
        }
    }

    /// Whether `operation` is currently enabled.
    pub fn allows(&self, operation: Operation) -> bool {
        match operation {
            Operation::CreateSpender => self.enable_create_spender,
            Operation::UpdateSpender => self.enable_update_spender,
            Operation::CreateTransaction => self.enable_create_transaction,
            Operation::UpdateTransaction => self.enable_update_transaction,
        }
    }
}

fn flag_from_env(name: &str) -> bool {
    parse_flag(env::var(name).ok().as_deref())
}

/// A missing or unparsable value leaves the flag enabled.
fn parse_flag(value: Option<&str>) -> bool {
    value.and_then(|value| value.parse().ok()).unwrap_or(true)
}
