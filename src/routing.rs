//! Application router configuration and the cross-origin policy for the API.

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    routes::{
        category::get_categories,
        savings::{create_savings_account, get_savings},
        transaction::{create_transaction, get_transactions},
    },
    stores::{CategoryStore, SavingsStore, SubcategoryStore, TransactionStore},
};

/// The web origin allowed to call the API unless overridden at startup.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Return a router with all the app's routes.
///
/// Every route sits under the `/api` prefix and shares a static cross-origin
/// policy fixed for the lifetime of the process: only `allowed_origin` may
/// call the API, with the methods and headers the web client uses. PUT and
/// DELETE are permitted by the policy although no route implements them.
pub fn build_router<C, S, T, V>(state: AppState<C, S, T, V>, allowed_origin: HeaderValue) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    S: SubcategoryStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
    V: SavingsStore + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions).post(create_transaction),
        )
        .route(endpoints::CATEGORIES, get(get_categories))
        .route(
            endpoints::SAVINGS,
            get(get_savings).post(create_savings_account),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::{HeaderValue, StatusCode, header::ORIGIN};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{endpoints, stores::sqlite::create_app_state};

    use super::{DEFAULT_ALLOWED_ORIGIN, build_router};

    fn get_test_server() -> TestServer {
        let state = create_app_state(Connection::open_in_memory().unwrap()).unwrap();
        let router = build_router(state, DEFAULT_ALLOWED_ORIGIN.parse().unwrap());

        TestServer::new(router)
    }

    fn milk_payload() -> Value {
        json!({
            "category": "Food",
            "subcategory": "Groceries",
            "description": "Milk",
            "amount": 4.5,
            "date": "2024-01-01T00:00:00"
        })
    }

    #[test]
    fn default_allowed_origin_parses_as_header_value() {
        assert!(DEFAULT_ALLOWED_ORIGIN.parse::<HeaderValue>().is_ok());
    }

    #[tokio::test]
    async fn get_transactions_on_empty_store_returns_empty_array() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn create_transaction_returns_created_transaction() {
        let server = get_test_server();

        let response = server.post(endpoints::TRANSACTIONS).json(&milk_payload()).await;

        response.assert_status(StatusCode::CREATED);

        let transaction = response.json::<Value>();
        assert_eq!(transaction["amount"], 4.5);
        assert_eq!(transaction["date"], "2024-01-01T00:00:00");
        assert_eq!(transaction["category"], "Food");
        assert_eq!(transaction["subcategory"], "Groceries");
        assert_eq!(transaction["description"], "Milk");
        assert_eq!(transaction["transaction_type"], "expense");
        assert_eq!(transaction["payment_method"], Value::Null);
        assert!(transaction["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(
            transaction["budget_id"]
                .as_str()
                .is_some_and(|id| !id.is_empty())
        );
        assert_eq!(transaction["created_at"], transaction["updated_at"]);
    }

    #[tokio::test]
    async fn create_transaction_with_missing_amount_returns_bad_request() {
        let server = get_test_server();
        let payload = json!({
            "category": "Food",
            "subcategory": "Groceries",
            "description": "Milk",
            "date": "2024-01-01T00:00:00"
        });

        let response = server.post(endpoints::TRANSACTIONS).json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
    }

    #[tokio::test]
    async fn create_transaction_with_unparseable_date_returns_bad_request() {
        let server = get_test_server();
        let mut payload = milk_payload();
        payload["date"] = json!("yesterday");

        let response = server.post(endpoints::TRANSACTIONS).json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_creates_reuse_category_and_subcategory() {
        let server = get_test_server();

        let first = server
            .post(endpoints::TRANSACTIONS)
            .json(&milk_payload())
            .await
            .json::<Value>();
        let second = server
            .post(endpoints::TRANSACTIONS)
            .json(&milk_payload())
            .await
            .json::<Value>();

        assert_ne!(first["id"], second["id"]);
        assert_eq!(first["budget_id"], second["budget_id"]);

        let categories = server.get(endpoints::CATEGORIES).await.json::<Value>();
        let categories = categories.as_array().unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["subcategories"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_categories_nests_subcategories() {
        let server = get_test_server();
        server.post(endpoints::TRANSACTIONS).json(&milk_payload()).await;

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status(StatusCode::OK);

        let categories = response.json::<Value>();
        assert_eq!(categories[0]["name"], "Food");
        assert_eq!(categories[0]["subcategories"][0]["name"], "Groceries");
        assert!(
            categories[0]["subcategories"][0]["id"]
                .as_str()
                .is_some_and(|id| !id.is_empty())
        );
    }

    #[tokio::test]
    async fn create_savings_account_returns_account_with_difference() {
        let server = get_test_server();
        let payload = json!({"name": "Holiday", "amount": 250.0, "goal": 1000.0});

        let response = server.post(endpoints::SAVINGS).json(&payload).await;

        response.assert_status(StatusCode::CREATED);

        let account = response.json::<Value>();
        assert_eq!(account["name"], "Holiday");
        assert_eq!(account["difference"], 750.0);

        let listing = server.get(endpoints::SAVINGS).await.json::<Value>();
        assert_eq!(listing.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn responses_carry_cors_header_for_allowed_origin() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_header(ORIGIN, HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .expect("response is missing the allow-origin header"),
            DEFAULT_ALLOWED_ORIGIN
        );
    }
}
