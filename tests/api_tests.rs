// HTTP API tests against the in-process actix service.

use actix_web::{test, web, App};
use std::sync::Arc;

use cardmatch::routes::{cards::AppState, configure_routes};
use cardmatch::{CardCatalog, Recommender, WeightFactors};

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(CardCatalog::with_seed_cards()),
        recommender: Recommender::new(WeightFactors::default()),
        default_limit: 5,
        max_limit: 20,
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[actix_web::test]
async fn test_recommend_success_envelope() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(serde_json::json!({
            "annual_income": 800000.0,
            "employment_type": "Salaried",
            "age": 30,
            "credit_score": "750-800",
            "primary_spending_categories": ["Dining", "Online Shopping"],
            "reward_preference": "Cashback",
            "fee_preference": "No annual fee"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 5);
    for offer in recommendations {
        let score = offer["match_score"].as_f64().unwrap();
        assert!((0.0..=10.0).contains(&score));
        assert!(offer["match_reasons"].is_array());
        assert!(offer["card_name"].is_string());
    }
}

#[actix_web::test]
async fn test_recommend_validation_failure_envelope() {
    let app = init_app!();

    // Age below the accepted range
    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(serde_json::json!({
            "annual_income": 800000.0,
            "employment_type": "Salaried",
            "age": 15
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
    assert!(body.get("recommendations").is_none());
}

#[actix_web::test]
async fn test_recommend_ineligible_user_gets_empty_list() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/recommend")
        .set_json(serde_json::json!({
            "annual_income": 50000.0,
            "employment_type": "Salaried",
            "age": 30
        }))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_list_cards() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/cards").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), CardCatalog::with_seed_cards().len());
}

#[actix_web::test]
async fn test_get_card_by_id() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/card/hdfc_regalia")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["card"]["card_id"], "hdfc_regalia");
}

#[actix_web::test]
async fn test_get_unknown_card_fails_in_envelope() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/card/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Card with ID nope not found");
}

#[actix_web::test]
async fn test_list_issuers_sorted_distinct() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/issuers").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let issuers: Vec<String> =
        serde_json::from_value(body["issuers"].clone()).unwrap();
    assert!(issuers.contains(&"HDFC Bank".to_string()));
    let mut expected = issuers.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(issuers, expected);
}

#[actix_web::test]
async fn test_list_types() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/types").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let types = body["types"].as_array().unwrap();
    assert!(types.iter().any(|t| t == "rewards"));
    assert!(types.iter().any(|t| t == "cashback"));
}
