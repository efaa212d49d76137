use serde::{Deserialize, Serialize};

use crate::models::domain::{CreditCard, ScoredCard};

/// Successful response for the recommend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<ScoredCard>,
}

/// Application-level failure envelope: transport succeeded but the
/// operation did not. Shared by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Both possible shapes of the recommend response, as seen by the
/// dispatching client.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendPayload {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<ScoredCard>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response for the full card listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub success: bool,
    pub cards: Vec<CreditCard>,
}

/// Response for a single card lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub success: bool,
    pub card: CreditCard,
}

/// Response listing distinct issuers in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuersResponse {
    pub success: bool,
    pub issuers: Vec<String>,
}

/// Response listing distinct card types in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesResponse {
    pub success: bool,
    pub types: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
