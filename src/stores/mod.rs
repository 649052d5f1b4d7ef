//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).

mod category;
mod savings;
mod subcategory;
mod transaction;

pub mod sqlite;

pub use category::CategoryStore;
pub use savings::{InMemorySavingsStore, SavingsStore};
pub use subcategory::SubcategoryStore;
pub use transaction::TransactionStore;
