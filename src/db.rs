//! Schema setup and row mapping for the SQLite backend.

use rusqlite::{Connection, Row};

use crate::{spender::Spender, transaction::Transaction};

/// Create the tables for the domain models if they do not exist.
///
/// `spender_id` is a soft reference: no foreign key is enforced.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS spender (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )",
        (),
    )?;

    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            spender_id INTEGER,
            date TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            transaction_type TEXT NOT NULL,
            note TEXT NOT NULL,
            image_url TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Convert a `SELECT id, name, email` row into a [Spender].
pub fn map_row_to_spender(row: &Row) -> Result<Spender, rusqlite::Error> {
    Ok(Spender {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

/// Convert a full transaction row into a [Transaction].
///
/// Expects the column order used by the queries in [crate::transaction] and
/// [crate::spender]: id, spender_id, date, amount, category,
/// transaction_type, note, image_url.
pub fn map_row_to_transaction(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        spender_id: row.get(1)?,
        date: row.get(2)?,
        amount: row.get(3)?,
        category: row.get(4)?,
        transaction_type: row.get(5)?,
        note: row.get(6)?,
        image_url: row.get(7)?,
    })
}
