//! Defines the savings account store trait and its in-memory implementation.

use std::sync::{Arc, Mutex};

use crate::{Error, models::SavingsAccount};

/// Creates and retrieves savings accounts.
///
/// Savings accounts are transfer objects rather than database rows, so the
/// provided implementation keeps them in process memory.
pub trait SavingsStore {
    /// Add a savings account to the store.
    fn create(&mut self, account: SavingsAccount) -> Result<SavingsAccount, Error>;

    /// Retrieve every savings account in the store.
    fn get_all(&self) -> Result<Vec<SavingsAccount>, Error>;
}

/// Holds savings accounts in process memory for the lifetime of the server.
#[derive(Debug, Clone, Default)]
pub struct InMemorySavingsStore {
    // Arc Mutex so that clones of the store share state across request
    // handlers.
    accounts: Arc<Mutex<Vec<SavingsAccount>>>,
}

impl SavingsStore for InMemorySavingsStore {
    fn create(&mut self, account: SavingsAccount) -> Result<SavingsAccount, Error> {
        self.accounts.lock().unwrap().push(account.clone());

        Ok(account)
    }

    fn get_all(&self) -> Result<Vec<SavingsAccount>, Error> {
        Ok(self.accounts.lock().unwrap().clone())
    }
}
