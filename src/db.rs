//! This module defines and implements traits for setting up and reading the
//! application's database.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    stores::sqlite::{SQLiteCategoryStore, SQLiteSubcategoryStore, SQLiteTransactionStore},
};

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create a table for the model.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping from a `rusqlite::Row` from a SQLite database to a concrete rust type.
pub trait MapRow {
    /// The type that the row maps to.
    type ReturnType;

    /// Convert a row into a concrete type.
    ///
    /// **Note:** This function expects that the row object contains all the
    /// table columns in the order they were defined.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type, or if an invalid column index was used.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a row into a concrete type, reading from the column at `offset`.
    ///
    /// The `offset` is useful in cases where tables have been joined and you
    /// want to construct two different types from the one query.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type, or if an invalid column index was used.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create the tables for the domain models if they do not exist.
///
/// Table creation runs inside a single SQL transaction, so the schema is
/// either fully present or untouched afterwards.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = connection.unchecked_transaction()?;

    SQLiteCategoryStore::create_table(&transaction)?;
    SQLiteSubcategoryStore::create_table(&transaction)?;
    SQLiteTransactionStore::create_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        let count: i64 = connection
            .query_row(
                "SELECT COUNT(name) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('category', 'subcategory', 'transaction')",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 3);
    }

    #[test]
    fn is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();
        initialize(&connection).unwrap();
    }
}
