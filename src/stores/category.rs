//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryName},
};

/// Creates and retrieves the categories that transactions are recorded under.
pub trait CategoryStore {
    /// Return the category named `name`, creating it if it does not exist.
    fn get_or_create(&mut self, name: CategoryName) -> Result<Category, Error>;

    /// Get a category by its exact name.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no category has that name.
    fn get_by_name(&self, name: &CategoryName) -> Result<Category, Error>;

    /// Get all categories.
    fn get_all(&self) -> Result<Vec<Category>, Error>;
}
