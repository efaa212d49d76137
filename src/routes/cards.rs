use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Recommender;
use crate::models::{
    CardResponse, CardsResponse, FailureResponse, HealthResponse, IssuersResponse,
    RecommendResponse, TypesResponse, UserPreferences,
};
use crate::services::CardCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CardCatalog>,
    pub recommender: Recommender,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all card-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/cards", web::get().to(list_cards))
        .route("/card/{card_id}", web::get().to(get_card))
        .route("/issuers", web::get().to(list_issuers))
        .route("/types", web::get().to(list_types));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation endpoint
///
/// POST /api/recommend
///
/// Body: the user's preferences as collected by the preference form.
/// Responds with `{"success": true, "recommendations": [...]}` or, on any
/// application-level failure, `{"success": false, "error": "..."}`.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<UserPreferences>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejecting recommend request: {}", errors);
        return HttpResponse::Ok().json(FailureResponse::new(errors.to_string()));
    }

    let limit = state.default_limit.min(state.max_limit);

    tracing::info!(
        "Recommending cards: income={}, age={}, limit={}",
        req.annual_income,
        req.age,
        limit
    );

    let result = state
        .recommender
        .recommend(&req, state.catalog.all(), limit);

    tracing::info!(
        "Returning {} offers (from {} catalog cards)",
        result.offers.len(),
        result.total_considered
    );

    HttpResponse::Ok().json(RecommendResponse {
        success: true,
        recommendations: result.offers,
    })
}

/// Full catalog listing
///
/// GET /api/cards
async fn list_cards(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CardsResponse {
        success: true,
        cards: state.catalog.all().to_vec(),
    })
}

/// Single card lookup
///
/// GET /api/card/{card_id}
async fn get_card(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let card_id = path.into_inner();
    match state.catalog.get(&card_id) {
        Some(card) => HttpResponse::Ok().json(CardResponse {
            success: true,
            card: card.clone(),
        }),
        None => HttpResponse::Ok().json(FailureResponse::new(format!(
            "Card with ID {} not found",
            card_id
        ))),
    }
}

/// Distinct issuers
///
/// GET /api/issuers
async fn list_issuers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(IssuersResponse {
        success: true,
        issuers: state.catalog.issuers(),
    })
}

/// Distinct card types
///
/// GET /api/types
async fn list_types(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(TypesResponse {
        success: true,
        types: state.catalog.card_types(),
    })
}
