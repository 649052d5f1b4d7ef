//! Defines the transaction store trait.

use crate::{
    Error,
    models::{Transaction, TransactionBuilder},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// Implementers must resolve the builder's category and subcategory by
    /// name, creating either if it does not exist, and persist all three
    /// records atomically so that a failure leaves no orphaned rows.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;
}
