use serde::{Deserialize, Serialize};

/// A catalog entry for a single credit card.
///
/// Field names follow the catalog JSON format. Fields the service does not
/// use (network, contactless flags, late fees, ...) are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub card_id: String,
    pub card_name: String,
    pub issuer: String,
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub card_tier: String,
    #[serde(default)]
    pub joining_fee: f64,
    #[serde(default)]
    pub annual_fee: f64,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub forex_markup: f64,
    #[serde(default)]
    pub fee_waiver_condition: Option<String>,
    #[serde(default)]
    pub reward_rate: f64,
    #[serde(default)]
    pub cashback_rate: f64,
    #[serde(default)]
    pub reward_categories: Vec<String>,
    #[serde(default)]
    pub lounge_access: bool,
    #[serde(default)]
    pub lounge_access_count: u32,
    #[serde(default)]
    pub fuel_surcharge_waiver: bool,
    #[serde(default)]
    pub movie_benefits: bool,
    #[serde(default)]
    pub dining_benefits: bool,
    #[serde(default)]
    pub travel_benefits: bool,
    #[serde(default)]
    pub shopping_benefits: bool,
    #[serde(default)]
    pub welcome_benefits: Option<String>,
    #[serde(default)]
    pub min_income: f64,
    #[serde(default)]
    pub min_age: u32,
    /// 0 means no upper age limit.
    #[serde(default)]
    pub max_age: u32,
    #[serde(default)]
    pub credit_score_required: u32,
    #[serde(default)]
    pub employment_type: Vec<String>,
    #[serde(default)]
    pub card_description: String,
    #[serde(default)]
    pub card_image_url: String,
    #[serde(default)]
    pub apply_url: String,
    #[serde(default)]
    pub popularity_score: f64,
}

/// A recommended card as returned by the API: the full catalog record
/// flattened into the response object, plus the computed match score
/// (0-10 scale) and the ordered list of human-readable match reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCard {
    #[serde(flatten)]
    pub card: CreditCard,
    pub match_score: f64,
    pub match_reasons: Vec<String>,
}

/// Weight factors for the scoring model.
///
/// Eligibility criteria (income, age, credit score, employment type) are
/// hard filters and carry no weight here.
#[derive(Debug, Clone, Copy)]
pub struct WeightFactors {
    // Fee preferences
    pub annual_fee_match: f64,
    pub fee_waiver_match: f64,

    // Reward preferences
    pub reward_type_match: f64,
    pub spending_category_match: f64,

    // Travel preferences
    pub travel_benefits_match: f64,
    pub lounge_access_match: f64,
    pub forex_markup_value: f64,

    // Lifestyle preferences
    pub fuel_benefits_match: f64,
    pub dining_benefits_match: f64,
    pub shopping_benefits_match: f64,
    pub entertainment_benefits_match: f64,

    // Bank preferences
    pub preferred_bank_match: f64,
    pub existing_relationship_match: f64,

    // Card tier preferences
    pub card_tier_match: f64,

    // Additional factors
    pub popularity_score: f64,
    pub complementary_to_existing_cards: f64,
}

impl WeightFactors {
    /// Maximum attainable factor total, used to normalize raw scores
    /// onto the 0-10 match score scale.
    pub fn max_total(&self) -> f64 {
        self.annual_fee_match
            + self.fee_waiver_match
            + self.reward_type_match
            + self.spending_category_match
            + self.travel_benefits_match
            + self.lounge_access_match
            + self.forex_markup_value
            + self.fuel_benefits_match
            + self.dining_benefits_match
            + self.shopping_benefits_match
            + self.entertainment_benefits_match
            + self.preferred_bank_match
            + self.existing_relationship_match
            + self.card_tier_match
            + self.popularity_score
            + self.complementary_to_existing_cards
    }
}

impl Default for WeightFactors {
    fn default() -> Self {
        Self {
            annual_fee_match: 7.0,
            fee_waiver_match: 6.0,
            reward_type_match: 8.0,
            spending_category_match: 8.0,
            travel_benefits_match: 6.0,
            lounge_access_match: 5.0,
            forex_markup_value: 5.0,
            fuel_benefits_match: 4.0,
            dining_benefits_match: 4.0,
            shopping_benefits_match: 4.0,
            entertainment_benefits_match: 4.0,
            preferred_bank_match: 3.0,
            existing_relationship_match: 4.0,
            card_tier_match: 5.0,
            popularity_score: 2.0,
            complementary_to_existing_cards: 3.0,
        }
    }
}
