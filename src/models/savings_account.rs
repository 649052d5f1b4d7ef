//! This file defines the `SavingsAccount` type, a transfer object tracking
//! progress towards a savings goal.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::models::{EntityId, datetime};

/// A named pot of money with a savings goal.
///
/// Savings accounts are value objects rather than database rows; they are
/// held in process memory by the
/// [SavingsStore](crate::stores::SavingsStore). The `difference` field is
/// derived from `goal - amount` and is kept current by the update methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    id: EntityId,
    name: String,
    amount: f64,
    goal: f64,
    difference: f64,
    #[serde(with = "datetime::iso")]
    created_at: PrimitiveDateTime,
    #[serde(with = "datetime::iso")]
    updated_at: PrimitiveDateTime,
}

impl SavingsAccount {
    /// Create a new savings account, assigning it a fresh id and timestamps.
    pub fn new(name: String, amount: f64, goal: f64) -> Self {
        let now = datetime::now();

        Self {
            id: EntityId::new(),
            name,
            amount,
            goal,
            difference: goal - amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// The id of the savings account.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The name of the savings account.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The amount of money currently saved.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The savings goal.
    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// How much is left to save before the goal is reached.
    pub fn difference(&self) -> f64 {
        self.difference
    }

    /// When the savings account was created.
    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }

    /// When the savings account was last updated.
    pub fn updated_at(&self) -> PrimitiveDateTime {
        self.updated_at
    }

    /// Change the saved amount, recomputing `difference` and refreshing the
    /// `updated_at` timestamp.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.difference = self.goal - self.amount;
        self.updated_at = datetime::advance(self.updated_at);
    }

    /// Change the savings goal, recomputing `difference` and refreshing the
    /// `updated_at` timestamp.
    pub fn set_goal(&mut self, goal: f64) {
        self.goal = goal;
        self.difference = self.goal - self.amount;
        self.updated_at = datetime::advance(self.updated_at);
    }
}

#[cfg(test)]
mod savings_account_tests {
    use super::SavingsAccount;

    #[test]
    fn difference_is_goal_minus_amount() {
        let account = SavingsAccount::new("Holiday".to_string(), 250.0, 1000.0);

        assert_eq!(account.difference(), 750.0);
        assert_eq!(account.created_at(), account.updated_at());
    }

    #[test]
    fn set_amount_recomputes_difference() {
        let mut account = SavingsAccount::new("Holiday".to_string(), 250.0, 1000.0);

        account.set_amount(400.0);

        assert_eq!(account.difference(), 600.0);
        assert!(account.updated_at() >= account.created_at());
    }

    #[test]
    fn set_goal_recomputes_difference() {
        let mut account = SavingsAccount::new("Holiday".to_string(), 250.0, 1000.0);

        account.set_goal(500.0);

        assert_eq!(account.difference(), 250.0);
    }
}
