//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState, endpoints,
    spender::{
        create_spender_endpoint, get_spender_endpoint, get_spender_summary_endpoint,
        get_spender_transactions_endpoint, list_spenders_endpoint, update_spender_endpoint,
    },
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::SPENDERS,
            get(list_spenders_endpoint).post(create_spender_endpoint),
        )
        .route(
            endpoints::SPENDER,
            get(get_spender_endpoint).put(update_spender_endpoint),
        )
        .route(
            endpoints::SPENDER_TRANSACTIONS,
            get(get_spender_transactions_endpoint),
        )
        .route(endpoints::SPENDER_SUMMARY, get(get_spender_summary_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint).put(update_transaction_endpoint),
        )
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, config::FeatureFlags};

    fn get_test_server(feature_flags: FeatureFlags) -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, feature_flags).unwrap();

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_then_get_spender_round_trip() {
        let server = get_test_server(FeatureFlags::default());

        let response = server
            .post("/spenders")
            .text(r#"{"name": "HongJot", "email": "hong@jot.ok"}"#)
            .await;
        response.assert_status(StatusCode::CREATED);

        let response = server.get("/spenders/1").await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"id": 1, "name": "HongJot", "email": "hong@jot.ok"})
        );
    }

    #[tokio::test]
    async fn disabled_flag_rejects_before_validation() {
        let server = get_test_server(FeatureFlags {
            enable_create_spender: false,
            ..Default::default()
        });

        // The body is malformed; the 403 proves the flag is checked first.
        let response = server.post("/spenders").text("{ bad request body }").await;

        response.assert_status(StatusCode::FORBIDDEN);
        assert_eq!(
            response.json::<Value>(),
            json!("create new spender feature is disabled")
        );
    }

    #[tokio::test]
    async fn non_integer_path_id_is_a_bad_request() {
        let server = get_test_server(FeatureFlags::default());

        let response = server.get("/spenders/non-int").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn spender_transactions_view_is_routed() {
        let server = get_test_server(FeatureFlags::default());

        let response = server.get("/spenders/1/transactions").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["transections"], json!([]));
        assert_eq!(body["pagination"]["per_page"], json!(10));
    }

    #[tokio::test]
    async fn spender_summary_uses_transections_path_spelling() {
        let server = get_test_server(FeatureFlags::default());

        let response = server.get("/spenders/1/transections/summary").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"summary": {
                "total_income": 0.0,
                "total_expenses": 0.0,
                "current_balance": 0.0,
            }})
        );
    }

    #[tokio::test]
    async fn transaction_routes_are_wired() {
        let server = get_test_server(FeatureFlags::default());

        let response = server
            .post("/transactions")
            .text(r#"{"date": "2024-04-30T09:00:00Z", "amount": 1500, "category": "Food"}"#)
            .await;
        response.assert_status(StatusCode::CREATED);

        let response = server.get("/transactions").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);

        let response = server.get("/transactions/1").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["amount"], json!(1500.0));
    }
}
