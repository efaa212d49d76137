//! Cardmatch - credit card recommendation service
//!
//! This library filters a card catalog by hard eligibility criteria,
//! scores the eligible cards against user preferences with a weighted
//! factor model, and renders the ranked offers as escaped HTML
//! fragments with per-card collapsible detail sections.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod view;

// Re-export commonly used types
pub use core::{RecommendResult, Recommender};
pub use models::{CreditCard, ScoredCard, UserPreferences, WeightFactors};
pub use services::CardCatalog;
pub use view::{match_percent, OfferRenderer, RecommendClient, ViewState};
