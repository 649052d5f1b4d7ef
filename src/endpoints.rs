//! The API endpoint URIs.

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to list categories with their subcategories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to list and create savings accounts.
pub const SAVINGS: &str = "/api/savings";
