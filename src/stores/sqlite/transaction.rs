//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params, types::Type};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{
        CategoryName, EntityId, SubcategoryName, Transaction, TransactionBuilder, TransactionType,
        datetime,
    },
    stores::TransactionStore,
};

use super::{category, parse_datetime, parse_optional_datetime, subcategory};

/// Stores transactions in a SQLite database.
///
/// Note that because a transaction depends on the
/// [Category](crate::models::Category) and
/// [Subcategory](crate::models::Subcategory) models, these models must be set
/// up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// The builder's category and subcategory are resolved by name, creating
    /// either if it does not exist. All three writes run inside one SQL
    /// transaction, so a failure leaves no orphaned category or subcategory
    /// rows.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error; no records are persisted in that case.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();
        let sql_transaction = connection.unchecked_transaction()?;

        let category = category::get_or_create(&sql_transaction, &builder.category)?;
        let subcategory =
            subcategory::get_or_create(&sql_transaction, &builder.subcategory, category.id())?;

        let transaction = builder.finalise(subcategory.id().clone());

        sql_transaction.execute(
            "INSERT INTO \"transaction\" (id, amount, date, category, subcategory, budget_id,
                description, payment_method, transaction_type, recurring_date,
                created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                transaction.id().as_str(),
                transaction.amount(),
                datetime::format(transaction.date()),
                transaction.category().as_ref(),
                transaction.subcategory().as_ref(),
                transaction.budget_id().as_str(),
                transaction.description(),
                transaction.payment_method(),
                transaction.transaction_type().as_str(),
                transaction.recurring_date().map(datetime::format),
                datetime::format(transaction.created_at()),
                datetime::format(transaction.updated_at()),
            ],
        )?;

        sql_transaction.commit()?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, amount, date, category, subcategory, budget_id,
                    description, payment_method, transaction_type, recurring_date,
                    created_at, updated_at
                 FROM \"transaction\"",
            )?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id TEXT PRIMARY KEY,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                subcategory TEXT NOT NULL,
                budget_id TEXT NOT NULL,
                description TEXT,
                payment_method TEXT,
                transaction_type TEXT NOT NULL,
                recurring_date TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(budget_id) REFERENCES subcategory(id) ON UPDATE CASCADE ON DELETE CASCADE
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = EntityId::from_string(row.get(offset)?);
        let amount = row.get(offset + 1)?;
        let date = parse_datetime(row, offset + 2)?;

        let raw_category: String = row.get(offset + 3)?;
        let category = CategoryName::new_unchecked(&raw_category);

        let raw_subcategory: String = row.get(offset + 4)?;
        let subcategory = SubcategoryName::new_unchecked(&raw_subcategory);

        let budget_id = EntityId::from_string(row.get(offset + 5)?);
        let description = row.get(offset + 6)?;
        let payment_method = row.get(offset + 7)?;

        let raw_type: String = row.get(offset + 8)?;
        let transaction_type = raw_type.parse::<TransactionType>().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(offset + 8, Type::Text, Box::new(error))
        })?;

        let recurring_date = parse_optional_datetime(row, offset + 9)?;
        let created_at = parse_datetime(row, offset + 10)?;
        let updated_at = parse_datetime(row, offset + 11)?;

        Ok(Transaction::from_parts(
            id,
            amount,
            date,
            category,
            subcategory,
            budget_id,
            description,
            payment_method,
            transaction_type,
            recurring_date,
            created_at,
            updated_at,
        ))
    }
}
