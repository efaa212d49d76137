use serde::{Deserialize, Serialize};
use validator::Validate;

/// User preferences posted to `/api/recommend`.
///
/// Option sets are closed on the form side, so they are modelled as enums
/// whose serde names are the exact strings the preference form submits.
/// Unrecognized values deserialize to the unspecified variant instead of
/// rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPreferences {
    #[validate(range(min = 0.0, max = 100000000.0))]
    pub annual_income: f64,
    #[validate(length(min = 1))]
    pub employment_type: String,
    #[validate(range(min = 18, max = 100))]
    pub age: u32,
    #[serde(default)]
    pub credit_score: CreditScoreBand,
    #[serde(default)]
    pub primary_spending_categories: Vec<String>,
    #[serde(default)]
    pub monthly_card_spend: MonthlySpend,
    #[serde(default)]
    pub international_transactions: bool,
    #[serde(default)]
    pub fee_preference: FeePreference,
    #[serde(default)]
    pub reward_preference: RewardPreference,
    #[serde(default)]
    pub travel_frequency: TravelFrequency,
    #[serde(default)]
    pub lounge_access_importance: LoungeImportance,
    #[serde(default)]
    pub preferred_banks: Vec<String>,
    #[serde(default)]
    pub existing_relationship: Vec<String>,
    #[serde(default)]
    pub existing_cards: bool,
    #[serde(default)]
    pub preferred_card_tier: Option<String>,
}

/// Self-reported credit score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CreditScoreBand {
    #[serde(rename = "Below 650")]
    Below650,
    #[serde(rename = "650-700")]
    From650To700,
    #[serde(rename = "700-750")]
    From700To750,
    #[serde(rename = "750-800")]
    From750To800,
    #[serde(rename = "Above 800")]
    Above800,
    #[default]
    #[serde(other, rename = "Don't Know")]
    DontKnow,
}

impl CreditScoreBand {
    /// Lower bound of the band, or None when the user does not know
    /// their score (in which case the credit-score filter is skipped).
    pub fn floor(&self) -> Option<u32> {
        match self {
            CreditScoreBand::DontKnow => None,
            CreditScoreBand::Below650 => Some(600),
            CreditScoreBand::From650To700 => Some(650),
            CreditScoreBand::From700To750 => Some(700),
            CreditScoreBand::From750To800 => Some(750),
            CreditScoreBand::Above800 => Some(800),
        }
    }
}

/// Estimated monthly card spend band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonthlySpend {
    #[serde(rename = "Less than ₹10,000")]
    UpTo10k,
    #[serde(rename = "₹10,000 - ₹25,000")]
    From10kTo25k,
    #[serde(rename = "₹25,000 - ₹50,000")]
    From25kTo50k,
    #[serde(rename = "₹50,000 - ₹1,00,000")]
    From50kTo1Lakh,
    #[serde(rename = "More than ₹1,00,000")]
    Above1Lakh,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

impl MonthlySpend {
    /// Midpoint of the band in rupees.
    pub fn monthly_estimate(&self) -> f64 {
        match self {
            MonthlySpend::UpTo10k => 5000.0,
            MonthlySpend::From10kTo25k => 17500.0,
            MonthlySpend::From25kTo50k => 37500.0,
            MonthlySpend::From50kTo1Lakh => 75000.0,
            MonthlySpend::Above1Lakh => 150000.0,
            MonthlySpend::Unspecified => 0.0,
        }
    }
}

/// Annual fee preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeePreference {
    #[serde(rename = "No annual fee")]
    NoAnnualFee,
    #[serde(rename = "Low annual fee with better benefits")]
    LowFee,
    #[serde(rename = "Don't mind higher fees for premium benefits")]
    PremiumOk,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

/// Preferred reward mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RewardPreference {
    #[serde(rename = "Cashback")]
    Cashback,
    #[serde(rename = "Reward Points")]
    RewardPoints,
    #[serde(rename = "Air Miles")]
    AirMiles,
    #[serde(rename = "Discounts")]
    Discounts,
    #[serde(rename = "No preference")]
    NoPreference,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

/// Travel frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TravelFrequency {
    #[serde(rename = "Rarely")]
    Rarely,
    #[serde(rename = "Occasionally")]
    Occasionally,
    #[serde(rename = "Frequently")]
    Frequently,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}

/// Importance of airport lounge access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoungeImportance {
    #[serde(rename = "Not important")]
    NotImportant,
    #[serde(rename = "Somewhat important")]
    SomewhatImportant,
    #[serde(rename = "Very important")]
    VeryImportant,
    #[default]
    #[serde(other, rename = "")]
    Unspecified,
}
