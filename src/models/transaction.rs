//! This file defines the type `Transaction`, the core type of the budgeting
//! part of the application, along with the builder used to create one.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::PrimitiveDateTime;

use crate::models::{CategoryName, EntityId, SubcategoryName, datetime};

/// Whether a transaction records money spent or money earned.
///
/// The type is metadata only: no sign convention is enforced on the
/// transaction amount, which is taken as the caller supplies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money spent.
    #[default]
    Expense,
    /// Money earned.
    Income,
}

impl TransactionType {
    /// The type as the lowercase string stored in the database and sent over
    /// the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The error returned when a transaction type string is not recognised.
#[derive(Debug, Error, PartialEq)]
#[error("\"{0}\" is not a valid transaction type, expected \"expense\" or \"income\"")]
pub struct ParseTransactionTypeError(String);

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(ParseTransactionTypeError(other.to_string())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// A transaction carries the names of its category and subcategory alongside
/// `budget_id`, the id of the subcategory whose budget allocation it draws
/// from.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// builder to a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: EntityId,
    amount: f64,
    #[serde(with = "datetime::iso")]
    date: PrimitiveDateTime,
    category: CategoryName,
    subcategory: SubcategoryName,
    budget_id: EntityId,
    description: Option<String>,
    payment_method: Option<String>,
    transaction_type: TransactionType,
    #[serde(default, with = "datetime::iso::option")]
    recurring_date: Option<PrimitiveDateTime>,
    #[serde(with = "datetime::iso")]
    created_at: PrimitiveDateTime,
    #[serde(with = "datetime::iso")]
    updated_at: PrimitiveDateTime,
}

impl Transaction {
    /// Create a builder for a new transaction.
    pub fn build(
        amount: f64,
        date: PrimitiveDateTime,
        category: CategoryName,
        subcategory: SubcategoryName,
    ) -> TransactionBuilder {
        TransactionBuilder::new(amount, date, category, subcategory)
    }

    /// Recreate a transaction from its stored fields.
    ///
    /// Intended for store implementations mapping database rows back into
    /// the domain type.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: EntityId,
        amount: f64,
        date: PrimitiveDateTime,
        category: CategoryName,
        subcategory: SubcategoryName,
        budget_id: EntityId,
        description: Option<String>,
        payment_method: Option<String>,
        transaction_type: TransactionType,
        recurring_date: Option<PrimitiveDateTime>,
        created_at: PrimitiveDateTime,
        updated_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            amount,
            date,
            category,
            subcategory,
            budget_id,
            description,
            payment_method,
            transaction_type,
            recurring_date,
            created_at,
            updated_at,
        }
    }

    /// The id of the transaction.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The amount of money spent or earned in this transaction.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction happened.
    pub fn date(&self) -> PrimitiveDateTime {
        self.date
    }

    /// The name of the category the transaction belongs to.
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// The name of the subcategory the transaction belongs to.
    pub fn subcategory(&self) -> &SubcategoryName {
        &self.subcategory
    }

    /// The id of the subcategory whose budget the transaction draws from.
    pub fn budget_id(&self) -> &EntityId {
        &self.budget_id
    }

    /// A text description of what the transaction was for.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// How the transaction was paid, e.g. "card".
    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    /// Whether the transaction records an expense or income.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// When the transaction recurs, if it does.
    pub fn recurring_date(&self) -> Option<PrimitiveDateTime> {
        self.recurring_date
    }

    /// When the transaction was created.
    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }

    /// When the transaction was last updated.
    pub fn updated_at(&self) -> PrimitiveDateTime {
        self.updated_at
    }

    /// Change the amount and refresh the `updated_at` timestamp.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.updated_at = datetime::advance(self.updated_at);
    }

    /// Change the description and refresh the `updated_at` timestamp.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = datetime::advance(self.updated_at);
    }
}

/// Builds a [Transaction] from request data.
///
/// The builder carries the category and subcategory names so that the store
/// can resolve (or create) the matching rows before finalising the
/// transaction with the resolved budget id.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened.
    pub date: PrimitiveDateTime,
    /// The name of the category to record the transaction under.
    pub category: CategoryName,
    /// The name of the subcategory to record the transaction under.
    pub subcategory: SubcategoryName,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// How the transaction was paid.
    pub payment_method: Option<String>,
    /// Whether the transaction records an expense or income.
    pub transaction_type: TransactionType,
    /// When the transaction recurs, if it does.
    pub recurring_date: Option<PrimitiveDateTime>,
}

impl TransactionBuilder {
    /// Create a new transaction builder with the required fields.
    pub fn new(
        amount: f64,
        date: PrimitiveDateTime,
        category: CategoryName,
        subcategory: SubcategoryName,
    ) -> Self {
        Self {
            amount,
            date,
            category,
            subcategory,
            description: None,
            payment_method: None,
            transaction_type: TransactionType::default(),
            recurring_date: None,
        }
    }

    /// Set the transaction's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transaction's payment method.
    pub fn payment_method(mut self, payment_method: Option<String>) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Set whether the transaction records an expense or income.
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Set the date the transaction recurs on.
    pub fn recurring_date(mut self, recurring_date: Option<PrimitiveDateTime>) -> Self {
        self.recurring_date = recurring_date;
        self
    }

    /// Create the transaction, linking it to the subcategory with
    /// `budget_id` and assigning it a fresh id and timestamps.
    pub fn finalise(self, budget_id: EntityId) -> Transaction {
        let now = datetime::now();

        Transaction {
            id: EntityId::new(),
            amount: self.amount,
            date: self.date,
            category: self.category,
            subcategory: self.subcategory,
            budget_id,
            description: self.description,
            payment_method: self.payment_method,
            transaction_type: self.transaction_type,
            recurring_date: self.recurring_date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod transaction_type_tests {
    use super::{ParseTransactionTypeError, TransactionType};

    #[test]
    fn default_is_expense() {
        assert_eq!(TransactionType::default(), TransactionType::Expense);
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn parses_from_stored_string() {
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!(
            "both".parse::<TransactionType>(),
            Err(ParseTransactionTypeError("both".to_string()))
        );
    }
}
