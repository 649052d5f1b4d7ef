//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryName, EntityId, datetime},
    stores::CategoryStore,
};

use super::parse_datetime;

/// Creates and retrieves transaction categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// Return the category named `name`, inserting a new row if none matches.
///
/// Takes a plain connection so the caller can run it inside a larger SQL
/// transaction.
pub(crate) fn get_or_create(
    connection: &Connection,
    name: &CategoryName,
) -> Result<Category, Error> {
    let existing = connection
        .prepare("SELECT id, name, created_at, updated_at FROM category WHERE name = :name")?
        .query_row(
            &[(":name", &name.as_ref())],
            SQLiteCategoryStore::map_row,
        );

    match existing {
        Ok(category) => Ok(category),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            let category = Category::new(name.clone());

            connection.execute(
                "INSERT INTO category (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
                (
                    category.id().as_str(),
                    category.name().as_ref(),
                    datetime::format(category.created_at()),
                    datetime::format(category.updated_at()),
                ),
            )?;

            Ok(category)
        }
        Err(error) => Err(error.into()),
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Return the category named `name`, creating it if it does not exist.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn get_or_create(&mut self, name: CategoryName) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();

        get_or_create(&connection, &name)
    }

    /// Retrieve the category named `name` from the database.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no category has that name, or
    /// [Error::SqlError] if there is an SQL error.
    fn get_by_name(&self, name: &CategoryName) -> Result<Category, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, created_at, updated_at FROM category WHERE name = :name")?
            .query_row(&[(":name", &name.as_ref())], Self::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all categories in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, created_at, updated_at FROM category")?
            .query_map([], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = EntityId::from_string(row.get(offset)?);

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        let created_at = parse_datetime(row, offset + 2)?;
        let updated_at = parse_datetime(row, offset + 3)?;

        Ok(Category::from_parts(id, name, created_at, updated_at))
    }
}

#[cfg(test)]
mod sqlite_category_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{Error, db::initialize, models::CategoryName, stores::CategoryStore};

    use super::SQLiteCategoryStore;

    fn get_test_store() -> SQLiteCategoryStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteCategoryStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn get_or_create_inserts_new_category() {
        let mut store = get_test_store();
        let name = CategoryName::new("Food").unwrap();

        let category = store.get_or_create(name.clone()).unwrap();

        assert!(!category.id().as_str().is_empty());
        assert_eq!(category.name(), &name);
        assert_eq!(category.created_at(), category.updated_at());
    }

    #[test]
    fn get_or_create_reuses_existing_category() {
        let mut store = get_test_store();
        let name = CategoryName::new_unchecked("Food");

        let first = store.get_or_create(name.clone()).unwrap();
        let second = store.get_or_create(name).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn get_by_name_returns_inserted_category() {
        let mut store = get_test_store();
        let inserted = store
            .get_or_create(CategoryName::new_unchecked("Food"))
            .unwrap();

        let selected = store.get_by_name(inserted.name());

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_by_name_with_unknown_name_returns_not_found() {
        let store = get_test_store();

        let selected = store.get_by_name(&CategoryName::new_unchecked("Rocketry"));

        assert_eq!(selected, Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_every_category() {
        let mut store = get_test_store();
        let first = store
            .get_or_create(CategoryName::new_unchecked("Food"))
            .unwrap();
        let second = store
            .get_or_create(CategoryName::new_unchecked("Transport"))
            .unwrap();

        let selected = store.get_all().unwrap();

        assert_eq!(selected, vec![first, second]);
    }
}
