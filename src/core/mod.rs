// Core algorithm exports
pub mod eligibility;
pub mod recommender;
pub mod scoring;

pub use eligibility::is_eligible;
pub use recommender::{RecommendResult, Recommender};
pub use scoring::{normalize_category, normalize_tier, score_card};
