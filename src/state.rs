//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::stores::{CategoryStore, SavingsStore, SubcategoryStore, TransactionStore};

/// The state of the REST server.
///
/// The store handles are injected at construction, so request handlers can
/// be exercised against test doubles as well as the SQLite backend.
#[derive(Debug, Clone)]
pub struct AppState<C, S, T, V>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    /// The store for managing [categories](crate::models::Category).
    pub category_store: C,
    /// The store for managing [subcategories](crate::models::Subcategory).
    pub subcategory_store: S,
    /// The store for managing [transactions](crate::models::Transaction).
    pub transaction_store: T,
    /// The store for managing [savings accounts](crate::models::SavingsAccount).
    pub savings_store: V,
}

impl<C, S, T, V> AppState<C, S, T, V>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    /// Create a new [AppState] from the given store handles.
    pub fn new(category_store: C, subcategory_store: S, transaction_store: T, savings_store: V) -> Self {
        Self {
            category_store,
            subcategory_store,
            transaction_store,
            savings_store,
        }
    }
}
