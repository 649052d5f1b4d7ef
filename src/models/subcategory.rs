//! This file defines the `Subcategory` type, a budget grouping nested under
//! a [Category](crate::models::Category) that carries its own allocation.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::{
    Error,
    models::{EntityId, datetime},
};

/// The budget allocation given to subcategories that are created implicitly
/// while recording a transaction, before the user has assigned one.
pub const DEFAULT_BUDGET: f64 = 0.0;

/// The name of a subcategory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct SubcategoryName(String);

impl SubcategoryName {
    /// Create a subcategory name.
    ///
    /// # Errors
    ///
    /// This function will return an error if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptySubcategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a subcategory name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for SubcategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SubcategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A budget grouping nested under a category.
///
/// Each subcategory belongs to exactly one category and carries the budget
/// allocation that transactions recorded against it draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    id: EntityId,
    name: SubcategoryName,
    budget: f64,
    category_id: EntityId,
    #[serde(with = "datetime::iso")]
    created_at: PrimitiveDateTime,
    #[serde(with = "datetime::iso")]
    updated_at: PrimitiveDateTime,
}

impl Subcategory {
    /// Create a new subcategory under the category with `category_id`,
    /// assigning it a fresh id and timestamps.
    pub fn new(name: SubcategoryName, budget: f64, category_id: EntityId) -> Self {
        let now = datetime::now();

        Self {
            id: EntityId::new(),
            name,
            budget,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recreate a subcategory from its stored fields.
    ///
    /// Intended for store implementations mapping database rows back into
    /// the domain type.
    pub fn from_parts(
        id: EntityId,
        name: SubcategoryName,
        budget: f64,
        category_id: EntityId,
        created_at: PrimitiveDateTime,
        updated_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            budget,
            category_id,
            created_at,
            updated_at,
        }
    }

    /// The id of the subcategory.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The name of the subcategory.
    pub fn name(&self) -> &SubcategoryName {
        &self.name
    }

    /// The budget allocated to the subcategory.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// The id of the category that owns the subcategory.
    pub fn category_id(&self) -> &EntityId {
        &self.category_id
    }

    /// When the subcategory was created.
    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }

    /// When the subcategory was last updated.
    pub fn updated_at(&self) -> PrimitiveDateTime {
        self.updated_at
    }

    /// Change the budget allocation and refresh the `updated_at` timestamp.
    pub fn set_budget(&mut self, budget: f64) {
        self.budget = budget;
        self.updated_at = datetime::advance(self.updated_at);
    }
}
