//! Implements a SQLite backed subcategory store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DEFAULT_BUDGET, EntityId, Subcategory, SubcategoryName, datetime},
    stores::SubcategoryStore,
};

use super::parse_datetime;

/// Creates and retrieves subcategories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteSubcategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteSubcategoryStore {
    /// Create a new subcategory store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// Return the subcategory named `name` under the category with
/// `category_id`, inserting a new row with the default budget if none
/// matches.
///
/// Uniqueness of (name, category) is enforced here by the lookup rather than
/// by a schema constraint.
///
/// Takes a plain connection so the caller can run it inside a larger SQL
/// transaction.
pub(crate) fn get_or_create(
    connection: &Connection,
    name: &SubcategoryName,
    category_id: &EntityId,
) -> Result<Subcategory, Error> {
    let existing = connection
        .prepare(
            "SELECT id, name, budget, category_id, created_at, updated_at FROM subcategory
             WHERE name = :name AND category_id = :category_id",
        )?
        .query_row(
            &[
                (":name", &name.as_ref()),
                (":category_id", &category_id.as_str()),
            ],
            SQLiteSubcategoryStore::map_row,
        );

    match existing {
        Ok(subcategory) => Ok(subcategory),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            let subcategory = Subcategory::new(name.clone(), DEFAULT_BUDGET, category_id.clone());

            connection.execute(
                "INSERT INTO subcategory (id, name, budget, category_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                (
                    subcategory.id().as_str(),
                    subcategory.name().as_ref(),
                    subcategory.budget(),
                    subcategory.category_id().as_str(),
                    datetime::format(subcategory.created_at()),
                    datetime::format(subcategory.updated_at()),
                ),
            )?;

            Ok(subcategory)
        }
        Err(error) => Err(error.into()),
    }
}

impl SubcategoryStore for SQLiteSubcategoryStore {
    /// Return the subcategory named `name` under the category with
    /// `category_id`, creating it with the default budget if it does not
    /// exist.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn get_or_create(
        &mut self,
        name: SubcategoryName,
        category_id: &EntityId,
    ) -> Result<Subcategory, Error> {
        let connection = self.connection.lock().unwrap();

        get_or_create(&connection, &name, category_id)
    }

    /// Retrieve the subcategory matching `name` and `category_id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no subcategory matches, or
    /// [Error::SqlError] if there is an SQL error.
    fn get(&self, name: &SubcategoryName, category_id: &EntityId) -> Result<Subcategory, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, budget, category_id, created_at, updated_at FROM subcategory
                 WHERE name = :name AND category_id = :category_id",
            )?
            .query_row(
                &[
                    (":name", &name.as_ref()),
                    (":category_id", &category_id.as_str()),
                ],
                Self::map_row,
            )
            .map_err(|error| error.into())
    }

    /// Retrieve all subcategories owned by the category with `category_id`.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_by_category(&self, category_id: &EntityId) -> Result<Vec<Subcategory>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, name, budget, category_id, created_at, updated_at FROM subcategory
                 WHERE category_id = :category_id",
            )?
            .query_map(&[(":category_id", &category_id.as_str())], Self::map_row)?
            .map(|maybe_subcategory| maybe_subcategory.map_err(|error| error.into()))
            .collect()
    }
}

impl CreateTable for SQLiteSubcategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS subcategory (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                budget REAL NOT NULL,
                category_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE CASCADE
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteSubcategoryStore {
    type ReturnType = Subcategory;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = EntityId::from_string(row.get(offset)?);

        let raw_name: String = row.get(offset + 1)?;
        let name = SubcategoryName::new_unchecked(&raw_name);

        let budget = row.get(offset + 2)?;
        let category_id = EntityId::from_string(row.get(offset + 3)?);
        let created_at = parse_datetime(row, offset + 4)?;
        let updated_at = parse_datetime(row, offset + 5)?;

        Ok(Subcategory::from_parts(
            id,
            name,
            budget,
            category_id,
            created_at,
            updated_at,
        ))
    }
}
