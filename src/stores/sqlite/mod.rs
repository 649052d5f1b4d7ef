//! Contains the SQLite backed stores and convenience type alias and function
//! for an [AppState] that uses the SQLite backend.

mod category;
mod subcategory;
mod transaction;

pub use category::SQLiteCategoryStore;
pub use subcategory::SQLiteSubcategoryStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};
use time::PrimitiveDateTime;

use crate::{AppState, Error, db::initialize, models::datetime, stores::InMemorySavingsStore};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SqliteAppState = AppState<
    SQLiteCategoryStore,
    SQLiteSubcategoryStore,
    SQLiteTransactionStore,
    InMemorySavingsStore,
>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the
/// domain models if they are absent. The connection is opened once and
/// shared by the stores for the lifetime of the state.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SqliteAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteSubcategoryStore::new(connection.clone()),
        SQLiteTransactionStore::new(connection),
        InMemorySavingsStore::default(),
    ))
}

/// Read the date-time stored as text in the column at `index`.
pub(crate) fn parse_datetime(row: &Row, index: usize) -> Result<PrimitiveDateTime, rusqlite::Error> {
    let text: String = row.get(index)?;

    datetime::parse(&text)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}

/// Read the nullable date-time stored as text in the column at `index`.
pub(crate) fn parse_optional_datetime(
    row: &Row,
    index: usize,
) -> Result<Option<PrimitiveDateTime>, rusqlite::Error> {
    let text: Option<String> = row.get(index)?;

    text.map(|text| {
        datetime::parse(&text).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
        })
    })
    .transpose()
}
