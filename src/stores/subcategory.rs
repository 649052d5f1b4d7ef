//! Defines the subcategory store trait.

use crate::{
    Error,
    models::{EntityId, Subcategory, SubcategoryName},
};

/// Creates and retrieves the subcategories nested under
/// [categories](crate::models::Category).
pub trait SubcategoryStore {
    /// Return the subcategory named `name` under the category with
    /// `category_id`, creating it with the default budget if it does not
    /// exist.
    fn get_or_create(
        &mut self,
        name: SubcategoryName,
        category_id: &EntityId,
    ) -> Result<Subcategory, Error>;

    /// Get a subcategory by its exact name and owning category.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no subcategory matches.
    fn get(&self, name: &SubcategoryName, category_id: &EntityId) -> Result<Subcategory, Error>;

    /// Get all subcategories owned by the category with `category_id`.
    fn get_by_category(&self, category_id: &EntityId) -> Result<Vec<Subcategory>, Error>;
}
