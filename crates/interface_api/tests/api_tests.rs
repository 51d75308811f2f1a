//! Router-level tests against in-memory stores
//!
//! The full router runs on the seeded mock fixture with a clock pinned at
//! 2025-06-15, so the supported window is 1975-06-15..2075-06-15 and the
//! insured car's policy covers 2020-01-01..2030-01-01.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use domain_insurance::CarStore;
use interface_api::{create_router, AppState};
use test_utils::InsuranceFixture;

async fn server() -> (TestServer, InsuranceFixture) {
    let fx = InsuranceFixture::seeded().await;
    let state = AppState {
        cars: fx.cars.clone() as Arc<dyn CarStore>,
        validity: Arc::new(fx.validity_checker()),
        registrar: Arc::new(fx.registrar()),
    };
    let server = TestServer::new(create_router(state)).expect("router builds");
    (server, fx)
}

fn claim_body(claim_date: &str, description: &str, amount: f64) -> Value {
    json!({
        "claim_date": claim_date,
        "description": description,
        "amount": amount,
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _fx) = server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_cars_returns_seeded_cars() {
    let (server, fx) = server().await;

    let response = server.get("/api/cars").await;
    response.assert_status_ok();

    let cars: Value = response.json();
    let cars = cars.as_array().unwrap();
    assert_eq!(cars.len(), 2);
    // Mock store lists by VIN
    assert_eq!(cars[0]["vin"], "VIN10001");
    assert_eq!(cars[0]["id"], fx.insured_car.id.to_string());
    assert_eq!(cars[1]["vin"], "VIN20002");
}

#[tokio::test]
async fn test_validity_inside_policy_window() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!(
            "/api/cars/{}/insurance-valid?date=2024-06-01",
            fx.insured_car.id
        ))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["date"], "2024-06-01");
    assert_eq!(body["car_id"], fx.insured_car.id.to_string());
}

#[tokio::test]
async fn test_validity_after_policy_lapses_is_false_not_error() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!(
            "/api/cars/{}/insurance-valid?date=2031-01-01",
            fx.insured_car.id
        ))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_validity_with_malformed_date() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!(
            "/api/cars/{}/insurance-valid?date=01-06-2024",
            fx.insured_car.id
        ))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid date format. Use YYYY-MM-DD.");
}

#[tokio::test]
async fn test_validity_without_date_parameter() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!("/api/cars/{}/insurance-valid", fx.insured_car.id))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Date must be provided");
}

#[tokio::test]
async fn test_validity_outside_supported_range() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!(
            "/api/cars/{}/insurance-valid?date=1970-01-01",
            fx.insured_car.id
        ))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("outside the supported range"));
}

#[tokio::test]
async fn test_validity_for_unknown_car() {
    let (server, _fx) = server().await;

    let response = server
        .get(&format!(
            "/api/cars/{}/insurance-valid?date=2024-06-01",
            core_kernel::CarId::new_v7()
        ))
        .await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["message"], "Car not found");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_unparseable_car_id_is_bad_request() {
    let (server, _fx) = server().await;

    let response = server
        .get("/api/cars/not-an-id/insurance-valid?date=2024-06-01")
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_claim_returns_created_claim() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&claim_body("2024-06-01", "Windshield crack", 350.75))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    assert!(body["id"].as_str().unwrap().starts_with("CLM-"));
    assert_eq!(body["car_id"], fx.insured_car.id.to_string());
    assert_eq!(body["description"], "Windshield crack");
    assert_eq!(body["currency"], "EUR");
}

#[tokio::test]
async fn test_register_claim_for_unknown_car() {
    let (server, _fx) = server().await;

    let response = server
        .post(&format!(
            "/api/cars/{}/claims",
            core_kernel::CarId::new_v7()
        ))
        .json(&claim_body("2024-06-01", "Stolen mirror", 80.0))
        .await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["message"], "Car not found");
}

#[tokio::test]
async fn test_register_claim_with_future_date() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&claim_body("2999-01-01", "Time travel", 10.0))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Claim date cannot be in the future");
}

#[tokio::test]
async fn test_register_claim_without_date() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&json!({ "description": "No date", "amount": 10.0 }))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Claim date must be provided");
}

#[tokio::test]
async fn test_register_claim_with_blank_description() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&claim_body("2024-06-01", "   ", 10.0))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Description must be provided");
}

#[tokio::test]
async fn test_register_claim_with_three_decimal_amount() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&claim_body("2024-06-01", "Scratched paint", 10.123))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Amount must have at most 2 decimals");
}

#[tokio::test]
async fn test_register_claim_with_zero_amount() {
    let (server, fx) = server().await;

    let response = server
        .post(&format!("/api/cars/{}/claims", fx.insured_car.id))
        .json(&claim_body("2024-06-01", "Nothing really", 0.0))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["message"], "Amount must be greater than zero");
}

#[tokio::test]
async fn test_claim_history_is_chronological() {
    let (server, fx) = server().await;
    let path = format!("/api/cars/{}/claims", fx.insured_car.id);

    for (date, desc) in [
        ("2024-08-20", "latest"),
        ("2023-02-03", "earliest"),
        ("2024-01-10", "middle"),
    ] {
        server
            .post(&path)
            .json(&claim_body(date, desc, 100.0))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server.get(&path).await;
    response.assert_status_ok();

    let claims: Value = response.json();
    let order: Vec<&str> = claims
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["description"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["earliest", "middle", "latest"]);
}

#[tokio::test]
async fn test_empty_claim_history() {
    let (server, fx) = server().await;

    let response = server
        .get(&format!("/api/cars/{}/claims", fx.uninsured_car.id))
        .await;
    response.assert_status_ok();

    let claims: Value = response.json();
    assert!(claims.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_claim_history_for_unknown_car() {
    let (server, _fx) = server().await;

    let response = server
        .get(&format!("/api/cars/{}/claims", core_kernel::CarId::new_v7()))
        .await;
    response.assert_status_not_found();
}
