//! The API endpoint URIs.

/// The route to list and create spenders.
pub const SPENDERS: &str = "/spenders";
/// The route to get or update a single spender.
pub const SPENDER: &str = "/spenders/{id}";
/// The route for a spender's transactions with their summary and pagination.
pub const SPENDER_TRANSACTIONS: &str = "/spenders/{id}/transactions";
/// The route for a spender's income/expense summary on its own.
///
/// Existing clients request the "transections" spelling; do not correct it.
pub const SPENDER_SUMMARY: &str = "/spenders/{id}/transections/summary";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to get or update a single transaction.
pub const TRANSACTION: &str = "/transactions/{id}";
