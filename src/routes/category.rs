//! This file defines the API route for listing categories and their
//! subcategories.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    models::EntityId,
    stores::{CategoryStore, SavingsStore, SubcategoryStore, TransactionStore},
};

/// A category with its owned subcategories, as returned by the categories
/// endpoint.
///
/// Budget figures are not part of this response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithSubcategories {
    /// The id of the category.
    pub id: EntityId,
    /// The name of the category.
    pub name: String,
    /// The subcategories owned by the category.
    pub subcategories: Vec<SubcategorySummary>,
}

/// The id and name of a subcategory nested in a
/// [CategoryWithSubcategories].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySummary {
    /// The id of the subcategory.
    pub id: EntityId,
    /// The name of the subcategory.
    pub name: String,
}

/// A route handler for listing all categories, each with its subcategories
/// nested inside.
pub async fn get_categories<C, S, T, V>(
    State(state): State<AppState<C, S, T, V>>,
) -> Result<Json<Vec<CategoryWithSubcategories>>, Error>
where
    C: CategoryStore + Send + Sync,
    S: SubcategoryStore + Send + Sync,
    T: TransactionStore + Send + Sync,
    V: SavingsStore + Send + Sync,
{
    let categories = state.category_store.get_all()?;
    let mut response = Vec::with_capacity(categories.len());

    for category in categories {
        let subcategories = state
            .subcategory_store
            .get_by_category(category.id())?
            .into_iter()
            .map(|subcategory| SubcategorySummary {
                id: subcategory.id().clone(),
                name: subcategory.name().to_string(),
            })
            .collect();

        response.push(CategoryWithSubcategories {
            id: category.id().clone(),
            name: category.name().to_string(),
            subcategories,
        });
    }

    Ok(Json(response))
}
