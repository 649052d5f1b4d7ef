//! This file defines the `Category` type and the types needed to create a category.
//! A category is a top-level grouping for budgets and transactions, e.g. "Food".

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::{
    Error,
    models::{EntityId, datetime},
};

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an error if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty, e.g. when the
    /// name comes from a database row that was validated on the way in.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A top-level budget grouping that owns zero or more
/// [subcategories](crate::models::Subcategory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: EntityId,
    name: CategoryName,
    #[serde(with = "datetime::iso")]
    created_at: PrimitiveDateTime,
    #[serde(with = "datetime::iso")]
    updated_at: PrimitiveDateTime,
}

impl Category {
    /// Create a new category, assigning it a fresh id and timestamps.
    pub fn new(name: CategoryName) -> Self {
        let now = datetime::now();

        Self {
            id: EntityId::new(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recreate a category from its stored fields.
    ///
    /// Intended for store implementations mapping database rows back into
    /// the domain type.
    pub fn from_parts(
        id: EntityId,
        name: CategoryName,
        created_at: PrimitiveDateTime,
        updated_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// The id of the category.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The name of the category.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// When the category was created.
    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }

    /// When the category was last updated.
    pub fn updated_at(&self) -> PrimitiveDateTime {
        self.updated_at
    }

    /// Change the category's name and refresh its `updated_at` timestamp.
    pub fn rename(&mut self, name: CategoryName) {
        self.name = name;
        self.updated_at = datetime::advance(self.updated_at);
    }
}


#[cfg(test)]
mod category_tests {
    use super::{Category, CategoryName};

    #[test]
    fn new_category_has_equal_timestamps() {
        let category = Category::new(CategoryName::new_unchecked("Food"));

        assert_eq!(category.created_at(), category.updated_at());
    }

    #[test]
    fn new_categories_have_unique_ids() {
        let first = Category::new(CategoryName::new_unchecked("Food"));
        let second = Category::new(CategoryName::new_unchecked("Food"));

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn rename_updates_name_and_timestamp() {
        let mut category = Category::new(CategoryName::new_unchecked("Food"));
        let created_at = category.created_at();

        category.rename(CategoryName::new_unchecked("Groceries"));

        assert_eq!(category.name().as_ref(), "Groceries");
        assert!(category.updated_at() >= created_at);
        assert_eq!(category.created_at(), created_at);
    }
}
