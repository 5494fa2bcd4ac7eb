//! The transaction resource: income and expense records, optionally scoped
//! to a spender.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error, config::Operation, db::map_row_to_transaction, parse_id,
};

/// A single income or expense record.
///
/// `transaction_type` determines the sign of `amount` during aggregation:
/// the literal `"income"` adds to income, everything else counts as an
/// expense. The stored amount itself is non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The store-assigned row id.
    pub id: i64,
    /// The owning spender, if any. A soft reference; no foreign key is
    /// enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spender_id: Option<i64>,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The non-negative amount of money moved.
    pub amount: f64,
    /// A free-form category label, e.g. "Food".
    #[serde(default)]
    pub category: String,
    /// `"income"` or anything else (treated as an expense).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transaction_type: String,
    /// A free-form note.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// A link to a receipt image.
    #[serde(default)]
    pub image_url: String,
}

/// The request body for creating or updating a transaction.
///
/// Any `id` field in the body is ignored: ids come from the store on create
/// and from the request path on update.
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    /// The owning spender, if any.
    #[serde(default)]
    pub spender_id: Option<i64>,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// The non-negative amount of money moved.
    pub amount: f64,
    /// A free-form category label.
    #[serde(default)]
    pub category: String,
    /// `"income"` or anything else.
    #[serde(default)]
    pub transaction_type: String,
    /// A free-form note.
    #[serde(default)]
    pub note: String,
    /// A link to a receipt image.
    #[serde(default)]
    pub image_url: String,
}

impl TransactionPayload {
    fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            spender_id: self.spender_id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            transaction_type: self.transaction_type,
            note: self.note,
            image_url: self.image_url,
        }
    }
}

const CREATE_STMT: &str = "INSERT INTO \"transaction\"
     (spender_id, date, amount, category, transaction_type, note, image_url)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
     RETURNING id";

const SELECT_COLUMNS: &str =
    "SELECT id, spender_id, date, amount, category, transaction_type, note, image_url
     FROM \"transaction\"";

/// A route handler for creating a new transaction.
///
/// Takes the body as a raw string so that the feature flag is checked before
/// the body is validated.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, Error> {
    if !state.feature_flags.allows(Operation::CreateTransaction) {
        return Err(Error::Forbidden(
            "create new transaction feature is disabled",
        ));
    }

    let payload: TransactionPayload =
        serde_json::from_str(&body).map_err(|error| Error::BadRequest(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let id = connection.prepare(CREATE_STMT)?.query_row(
        (
            &payload.spender_id,
            &payload.date,
            &payload.amount,
            &payload.category,
            &payload.transaction_type,
            &payload.note,
            &payload.image_url,
        ),
        |row| row.get::<_, i64>(0),
    )?;
    drop(connection);

    tracing::info!("created transaction {id}");

    Ok((StatusCode::CREATED, Json(payload.into_transaction(id))).into_response())
}

/// A route handler for getting a single transaction by its id.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let id = parse_id(&id)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let transaction = connection
        .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?
        .query_row([id], map_row_to_transaction)?;

    Ok(Json(transaction).into_response())
}

/// A route handler for updating a transaction.
///
/// The returned entity always carries the path id, even when the request
/// body supplies a different id. The affected-row count is not checked:
/// updating a missing id still reports success, which existing clients
/// expect.
pub async fn update_transaction_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Response, Error> {
    if !state.feature_flags.allows(Operation::UpdateTransaction) {
        return Err(Error::Forbidden("update transaction feature is disabled"));
    }

    let id = parse_id(&id)?;
    let payload: TransactionPayload =
        serde_json::from_str(&body).map_err(|error| Error::BadRequest(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    connection.execute(
        "UPDATE \"transaction\"
         SET spender_id = ?1, date = ?2, amount = ?3, category = ?4,
             transaction_type = ?5, note = ?6, image_url = ?7
         WHERE id = ?8",
        (
            &payload.spender_id,
            &payload.date,
            &payload.amount,
            &payload.category,
            &payload.transaction_type,
            &payload.note,
            &payload.image_url,
            &id,
        ),
    )?;
    drop(connection);

    tracing::info!("updated transaction {id}");

    Ok(Json(payload.into_transaction(id)).into_response())
}

/// A route handler for listing every transaction in store order.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let transactions = connection
        .prepare(SELECT_COLUMNS)?
        .query_map((), map_row_to_transaction)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(transactions).into_response())
}
