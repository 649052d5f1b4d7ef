//! This file defines the API routes for the transaction type.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use time::PrimitiveDateTime;

use crate::{
    AppState, Error,
    models::{CategoryName, SubcategoryName, Transaction, TransactionType, datetime},
    stores::{CategoryStore, SavingsStore, SubcategoryStore, TransactionStore},
};

/// The request body for creating a new transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    /// The name of the category to record the transaction under.
    pub category: String,
    /// The name of the subcategory to record the transaction under.
    pub subcategory: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened, as an ISO-8601 date-time string.
    #[serde(with = "datetime::iso")]
    pub date: PrimitiveDateTime,
    /// When the transaction recurs, if it does.
    #[serde(default, with = "datetime::iso::option")]
    pub recurring_date: Option<PrimitiveDateTime>,
    /// How the transaction was paid.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Whether the transaction records an expense or income.
    #[serde(default)]
    pub transaction_type: TransactionType,
}

/// A route handler for listing every recorded transaction.
pub async fn get_transactions<C, S, T, V>(
    State(state): State<AppState<C, S, T, V>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    state.transaction_store.get_all().map(Json)
}

/// A route handler for creating a new transaction.
///
/// The category and subcategory are resolved by name, creating either if it
/// does not exist, and the three records are persisted atomically.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction<C, S, T, V>(
    State(mut state): State<AppState<C, S, T, V>>,
    payload: Result<Json<CreateTransaction>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    let Json(request) = payload.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    let category = CategoryName::new(&request.category)?;
    let subcategory = SubcategoryName::new(&request.subcategory)?;

    let builder = Transaction::build(request.amount, request.date, category, subcategory)
        .description(request.description)
        .payment_method(request.payment_method)
        .transaction_type(request.transaction_type)
        .recurring_date(request.recurring_date);

    state
        .transaction_store
        .create(builder)
        .map(|transaction| (StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod transaction_route_tests {
    use axum::{Json, extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::{
        Error,
        models::{TransactionType, datetime},
        stores::sqlite::{SqliteAppState, create_app_state},
    };

    use super::{CreateTransaction, create_transaction, get_transactions};

    fn get_test_state() -> SqliteAppState {
        let connection = Connection::open_in_memory().unwrap();
        create_app_state(connection).unwrap()
    }

    fn milk_request() -> CreateTransaction {
        CreateTransaction {
            category: "Food".to_string(),
            subcategory: "Groceries".to_string(),
            description: "Milk".to_string(),
            amount: 4.5,
            date: datetime::parse("2024-01-01T00:00:00").unwrap(),
            recurring_date: None,
            payment_method: None,
            transaction_type: TransactionType::default(),
        }
    }

    #[tokio::test]
    async fn get_transactions_on_empty_store_returns_empty_list() {
        let state = get_test_state();

        let Json(transactions) = get_transactions(State(state)).await.unwrap();

        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn create_transaction_returns_created_with_fields() {
        let state = get_test_state();

        let (status, Json(transaction)) =
            create_transaction(State(state.clone()), Ok(Json(milk_request())))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(transaction.amount(), 4.5);
        assert_eq!(
            transaction.date(),
            datetime::parse("2024-01-01T00:00:00").unwrap()
        );
        assert_eq!(transaction.description(), Some("Milk"));
        assert_eq!(transaction.transaction_type(), TransactionType::Expense);
        assert_eq!(transaction.created_at(), transaction.updated_at());
    }

    #[tokio::test]
    async fn create_transaction_rejects_empty_category_name() {
        let state = get_test_state();
        let request = CreateTransaction {
            category: "".to_string(),
            ..milk_request()
        };

        let result = create_transaction(State(state), Ok(Json(request))).await;

        assert_eq!(result.unwrap_err(), Error::EmptyCategoryName);
    }

    #[tokio::test]
    async fn created_transactions_appear_in_listing() {
        let state = get_test_state();

        create_transaction(State(state.clone()), Ok(Json(milk_request())))
            .await
            .unwrap();

        let Json(transactions) = get_transactions(State(state)).await.unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].category().as_ref(), "Food");
    }
}
