//! The spender resource: CRUD endpoints plus the per-spender transaction
//! view with its derived summary.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    config::Operation,
    db::{map_row_to_spender, map_row_to_transaction},
    pagination::{Pagination, paginate},
    parse_id,
    summary::{Summary, summarize},
    transaction::Transaction,
};

/// An account that owns zero or more transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spender {
    /// The store-assigned row id. Unique and non-zero once persisted.
    pub id: i64,
    /// The spender's display name.
    pub name: String,
    /// The spender's email address.
    pub email: String,
}

/// The request body for creating or updating a spender.
#[derive(Debug, Deserialize)]
pub struct SpenderPayload {
    /// The spender's display name.
    pub name: String,
    /// The spender's email address.
    pub email: String,
}

/// The composite view returned for a spender's transactions.
#[derive(Debug, Serialize)]
pub struct SpenderTransactionsView {
    /// The spender's full transaction list. Existing clients parse the
    /// "transections" key as-is; do not correct the spelling.
    pub transections: Vec<Transaction>,
    /// Totals derived from the listed transactions.
    pub summary: Summary,
    /// Informational page numbers; the list above is never truncated.
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
struct SpenderSummaryView {
    summary: Summary,
}

const CREATE_STMT: &str = "INSERT INTO spender (name, email) VALUES (?1, ?2) RETURNING id";

/// A route handler for creating a new spender.
///
/// Takes the body as a raw string so that the feature flag is checked before
/// the body is validated.
pub async fn create_spender_endpoint(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, Error> {
    if !state.feature_flags.allows(Operation::CreateSpender) {
        return Err(Error::Forbidden("create new spender feature is disabled"));
    }

    let payload: SpenderPayload =
        serde_json::from_str(&body).map_err(|error| Error::BadRequest(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let id = connection
        .prepare(CREATE_STMT)?
        .query_row((&payload.name, &payload.email), |row| row.get::<_, i64>(0))?;
    drop(connection);

    tracing::info!("created spender {id}");

    let spender = Spender {
        id,
        name: payload.name,
        email: payload.email,
    };

    Ok((StatusCode::CREATED, Json(spender)).into_response())
}

/// A route handler for listing every spender.
pub async fn list_spenders_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let spenders = connection
        .prepare("SELECT id, name, email FROM spender")?
        .query_map((), map_row_to_spender)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(spenders).into_response())
}

/// A route handler for getting a single spender by its id.
pub async fn get_spender_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let id = parse_id(&id)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let spender = connection
        .prepare("SELECT id, name, email FROM spender WHERE id = ?1")?
        .query_row([id], map_row_to_spender)?;

    Ok(Json(spender).into_response())
}

/// A route handler for updating a spender's name and email.
///
/// The affected-row count is not checked: updating a missing id still
/// reports success, which existing clients expect.
pub async fn update_spender_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Response, Error> {
    if !state.feature_flags.allows(Operation::UpdateSpender) {
        return Err(Error::Forbidden("update spender feature is disabled"));
    }

    let id = parse_id(&id)?;
    let payload: SpenderPayload =
        serde_json::from_str(&body).map_err(|error| Error::BadRequest(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    connection.execute(
        "UPDATE spender SET name = ?1, email = ?2 WHERE id = ?3",
        (&payload.name, &payload.email, &id),
    )?;
    drop(connection);

    tracing::info!("updated spender {id}");

    Ok(Json("update successfully").into_response())
}

/// A route handler for a spender's transactions with their summary and
/// pagination metadata.
///
/// Issues exactly one query, then computes the totals in-process. The
/// pagination numbers are informational: every transaction is returned
/// regardless of the declared page size.
pub async fn get_spender_transactions_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let id = parse_id(&id)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let transactions = connection
        .prepare(
            "SELECT id, spender_id, date, amount, category, transaction_type, note, image_url
             FROM \"transaction\" WHERE spender_id = ?1",
        )?
        .query_map([id], map_row_to_transaction)?
        .collect::<Result<Vec<_>, _>>()?;
    drop(connection);

    let summary = summarize(
        transactions
            .iter()
            .map(|transaction| (transaction.amount, transaction.transaction_type.as_str())),
    );
    let pagination = paginate(transactions.len());

    Ok(Json(SpenderTransactionsView {
        transections: transactions,
        summary,
        pagination,
    })
    .into_response())
}

/// A route handler for a spender's income/expense summary on its own.
pub async fn get_spender_summary_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let id = parse_id(&id)?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;
    let entries = connection
        .prepare("SELECT amount, transaction_type FROM \"transaction\" WHERE spender_id = ?1")?
        .query_map([id], |row| {
            Ok((row.get::<_, f64>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    drop(connection);

    let summary = summarize(entries.iter().map(|(amount, kind)| (*amount, kind.as_str())));

    Ok(Json(SpenderSummaryView { summary }).into_response())
}
