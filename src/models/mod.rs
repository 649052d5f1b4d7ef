//! This module defines the domain data types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use category::{Category, CategoryName};
pub use savings_account::SavingsAccount;
pub use subcategory::{DEFAULT_BUDGET, Subcategory, SubcategoryName};
pub use transaction::{
    ParseTransactionTypeError, Transaction, TransactionBuilder, TransactionType,
};

pub mod datetime;

mod category;
mod savings_account;
mod subcategory;
mod transaction;

/// An opaque, globally unique identifier assigned to an entity at creation.
///
/// Identifiers are random and immutable. Use [EntityId::new] to mint one for
/// a new entity and [EntityId::from_string] to rehydrate one from storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Mint a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier that was previously minted by [EntityId::new].
    ///
    /// The caller should ensure the string came from storage; this function
    /// performs no validation.
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod entity_id_tests {
    use super::EntityId;

    #[test]
    fn new_ids_are_unique() {
        let ids: Vec<EntityId> = (0..100).map(|_| EntityId::new()).collect();

        for (index, id) in ids.iter().enumerate() {
            assert!(!id.as_str().is_empty());
            assert!(
                ids.iter().skip(index + 1).all(|other| other != id),
                "duplicate entity id {id}"
            );
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::from_string("abc-123".to_owned());

        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }
}
