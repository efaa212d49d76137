// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CreditCard, ScoredCard, WeightFactors};
pub use requests::{
    CreditScoreBand, FeePreference, LoungeImportance, MonthlySpend, RewardPreference,
    TravelFrequency, UserPreferences,
};
pub use responses::{
    CardResponse, CardsResponse, FailureResponse, HealthResponse, IssuersResponse,
    RecommendPayload, RecommendResponse, TypesResponse,
};
