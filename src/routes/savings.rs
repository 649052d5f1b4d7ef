//! This file defines the API routes for the savings account type.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    models::SavingsAccount,
    stores::{CategoryStore, SavingsStore, SubcategoryStore, TransactionStore},
};

/// The request body for creating a new savings account.
#[derive(Debug, Deserialize)]
pub struct CreateSavingsAccount {
    /// The name of the savings account.
    pub name: String,
    /// The amount of money currently saved.
    pub amount: f64,
    /// The savings goal.
    pub goal: f64,
}

/// A route handler for listing every savings account.
pub async fn get_savings<C, S, T, V>(
    State(state): State<AppState<C, S, T, V>>,
) -> Result<Json<Vec<SavingsAccount>>, Error>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    state.savings_store.get_all().map(Json)
}

/// A route handler for creating a new savings account.
pub async fn create_savings_account<C, S, T, V>(
    State(mut state): State<AppState<C, S, T, V>>,
    payload: Result<Json<CreateSavingsAccount>, JsonRejection>,
) -> Result<(StatusCode, Json<SavingsAccount>), Error>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    let Json(request) = payload.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

    let account = SavingsAccount::new(request.name, request.amount, request.goal);

    state
        .savings_store
        .create(account)
        .map(|account| (StatusCode::CREATED, Json(account)))
}
