use crate::models::{
    CreditCard, FeePreference, LoungeImportance, RewardPreference, TravelFrequency,
    UserPreferences, WeightFactors,
};

/// Annual spend above which a fee waiver is assumed to be within reach.
const FEE_WAIVER_SPEND_THRESHOLD: f64 = 100_000.0;

/// Score a card against the user's preferences.
///
/// Returns the raw factor total together with the reasons for every
/// factor that was awarded, in scoring order. The total is unnormalized;
/// the recommender maps it onto the 0-10 match score scale.
pub fn score_card(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
) -> (f64, Vec<String>) {
    let mut reasons = Vec::new();
    let mut total = 0.0;

    total += score_fees(card, preferences, weights, &mut reasons);
    total += score_rewards(card, preferences, weights, &mut reasons);
    total += score_travel(card, preferences, weights, &mut reasons);
    total += score_lifestyle(card, preferences, weights, &mut reasons);
    total += score_issuer(card, preferences, weights, &mut reasons);
    total += score_tier(card, preferences, weights, &mut reasons);
    total += score_extras(card, preferences, weights, &mut reasons);

    (total, reasons)
}

/// Annual fee preference and fee waiver likelihood.
pub fn score_fees(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    match preferences.fee_preference {
        FeePreference::NoAnnualFee if card.annual_fee == 0.0 => {
            score += weights.annual_fee_match;
            reasons.push("No annual fee".to_string());
        }
        FeePreference::LowFee if card.annual_fee > 0.0 && card.annual_fee <= 1000.0 => {
            score += weights.annual_fee_match * 0.8;
            reasons.push("Low annual fee".to_string());
        }
        FeePreference::PremiumOk if card.annual_fee > 1000.0 => {
            score += weights.annual_fee_match * 0.9;
            reasons.push("Premium card with higher fee".to_string());
        }
        _ => {}
    }

    if card.fee_waiver_condition.as_deref().is_some_and(|c| !c.is_empty()) {
        let annual_spend = preferences.monthly_card_spend.monthly_estimate() * 12.0;
        if annual_spend >= FEE_WAIVER_SPEND_THRESHOLD {
            score += weights.fee_waiver_match;
            reasons.push("Likely eligible for fee waiver based on spending".to_string());
        }
    }

    score
}

/// Reward mechanism match and spending-category overlap.
pub fn score_rewards(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    match preferences.reward_preference {
        RewardPreference::Cashback if card.cashback_rate > 0.0 => {
            score += weights.reward_type_match;
            reasons.push(format!(
                "Offers cashback at {}%",
                trim_decimal(card.cashback_rate)
            ));
        }
        RewardPreference::RewardPoints if card.reward_rate > 0.0 => {
            score += weights.reward_type_match;
            reasons.push(format!(
                "Offers reward points at {} points per ₹100",
                trim_decimal(card.reward_rate)
            ));
        }
        RewardPreference::AirMiles
            if card.reward_categories.iter().any(|c| c == "travel") =>
        {
            score += weights.reward_type_match;
            reasons.push("Offers air miles or travel rewards".to_string());
        }
        RewardPreference::Discounts
            if card
                .reward_categories
                .iter()
                .any(|c| matches!(c.as_str(), "shopping" | "dining" | "entertainment")) =>
        {
            score += weights.reward_type_match;
            reasons.push("Offers discounts on shopping, dining, or entertainment".to_string());
        }
        RewardPreference::NoPreference => {
            score += weights.reward_type_match * 0.5;
        }
        _ => {}
    }

    let user_categories = &preferences.primary_spending_categories;
    if !user_categories.is_empty() && !card.reward_categories.is_empty() {
        let normalized_user: Vec<String> = user_categories
            .iter()
            .map(|c| normalize_category(c))
            .collect();
        let normalized_card: Vec<String> = card
            .reward_categories
            .iter()
            .map(|c| normalize_category(c))
            .collect();

        let matches = normalized_user
            .iter()
            .filter(|c| normalized_card.contains(c))
            .count();

        if matches > 0 {
            let match_percentage = matches as f64 / normalized_user.len() as f64;
            score += weights.spending_category_match * match_percentage;

            if match_percentage >= 0.7 {
                reasons.push("Excellent match for your spending categories".to_string());
            } else if match_percentage >= 0.4 {
                reasons.push("Good match for your spending categories".to_string());
            } else {
                reasons.push("Matches some of your spending categories".to_string());
            }
        }
    }

    score
}

/// Travel frequency, lounge access importance and forex markup.
pub fn score_travel(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    if card.travel_benefits {
        match preferences.travel_frequency {
            TravelFrequency::Frequently => {
                score += weights.travel_benefits_match;
                reasons.push("Excellent travel benefits for frequent travelers".to_string());
            }
            TravelFrequency::Occasionally => {
                score += weights.travel_benefits_match * 0.7;
                reasons.push("Good travel benefits for occasional travelers".to_string());
            }
            TravelFrequency::Rarely => {
                score += weights.travel_benefits_match * 0.3;
            }
            TravelFrequency::Unspecified => {}
        }
    }

    if card.lounge_access {
        match preferences.lounge_access_importance {
            LoungeImportance::VeryImportant => {
                score += weights.lounge_access_match;
                if card.lounge_access_count > 0 {
                    reasons.push(format!(
                        "Offers {} complimentary lounge visits per year",
                        card.lounge_access_count
                    ));
                } else {
                    reasons.push("Offers airport lounge access".to_string());
                }
            }
            LoungeImportance::SomewhatImportant => {
                score += weights.lounge_access_match * 0.7;
                reasons.push("Offers airport lounge access".to_string());
            }
            LoungeImportance::NotImportant | LoungeImportance::Unspecified => {}
        }
    }

    if preferences.international_transactions {
        if card.forex_markup <= 2.0 {
            score += weights.forex_markup_value;
            reasons.push(format!(
                "Low forex markup at {}%",
                trim_decimal(card.forex_markup)
            ));
        } else if card.forex_markup <= 3.5 {
            score += weights.forex_markup_value * 0.5;
            reasons.push("Reasonable forex markup".to_string());
        }
    }

    score
}

/// Lifestyle benefit flags against declared spending categories.
pub fn score_lifestyle(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;
    let categories = &preferences.primary_spending_categories;
    let has = |name: &str| categories.iter().any(|c| c == name);

    if has("Fuel") && card.fuel_surcharge_waiver {
        score += weights.fuel_benefits_match;
        reasons.push("Offers fuel surcharge waiver".to_string());
    }
    if has("Dining") && card.dining_benefits {
        score += weights.dining_benefits_match;
        reasons.push("Offers dining benefits or discounts".to_string());
    }
    if has("Shopping") && card.shopping_benefits {
        score += weights.shopping_benefits_match;
        reasons.push("Offers shopping benefits or discounts".to_string());
    }
    if has("Entertainment") && card.movie_benefits {
        score += weights.entertainment_benefits_match;
        reasons.push("Offers movie or entertainment benefits".to_string());
    }

    score
}

/// Preferred bank and existing banking relationships.
pub fn score_issuer(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    if preferences.preferred_banks.contains(&card.issuer) {
        score += weights.preferred_bank_match;
        reasons.push(format!("Card from your preferred bank: {}", card.issuer));
    }
    if preferences.existing_relationship.contains(&card.issuer) {
        score += weights.existing_relationship_match;
        reasons.push(format!(
            "You have an existing relationship with {}",
            card.issuer
        ));
    }

    score
}

/// Card tier preference, compared on normalized tier names.
pub fn score_tier(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    if let Some(preferred) = preferences.preferred_card_tier.as_deref() {
        if !preferred.is_empty() && normalize_tier(&card.card_tier) == normalize_tier(preferred) {
            reasons.push(format!("Matches your preferred card tier: {}", preferred));
            return weights.card_tier_match;
        }
    }
    0.0
}

/// Popularity and starter-card boost.
pub fn score_extras(
    card: &CreditCard,
    preferences: &UserPreferences,
    weights: &WeightFactors,
    reasons: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    if card.popularity_score > 7.0 {
        score += weights.popularity_score;
        reasons.push("Highly popular card with excellent user ratings".to_string());
    } else if card.popularity_score > 5.0 {
        score += weights.popularity_score * 0.7;
        reasons.push("Well-rated card with good user feedback".to_string());
    }

    if !preferences.existing_cards && normalize_tier(&card.card_tier) == "basic" {
        score += weights.complementary_to_existing_cards;
        reasons.push("Good starter card for first-time users".to_string());
    }

    score
}

/// Collapse synonym spending categories onto canonical names.
pub fn normalize_category(category: &str) -> String {
    let category = category.to_lowercase();
    match category.as_str() {
        "grocery" | "groceries" => "groceries".to_string(),
        "dining" | "restaurant" | "restaurants" | "food" => "dining".to_string(),
        "shopping" | "retail" | "online shopping" => "shopping".to_string(),
        "travel" | "airline" | "airlines" | "hotel" | "hotels" => "travel".to_string(),
        "fuel" | "petrol" | "gas" | "diesel" => "fuel".to_string(),
        "entertainment" | "movie" | "movies" | "theatre" => "entertainment".to_string(),
        "bill" | "bills" | "bill payments" | "utility" | "utilities" => "bills".to_string(),
        _ => category,
    }
}

/// Collapse marketing tier names onto canonical tiers.
pub fn normalize_tier(tier: &str) -> String {
    let tier = tier.to_lowercase();
    match tier.as_str() {
        "basic" | "entry-level" | "basic/entry-level" | "standard" => "basic".to_string(),
        "gold" | "classic" | "gold/classic" => "gold".to_string(),
        "platinum" | "premium" | "platinum/premium" => "platinum".to_string(),
        "signature" | "infinite" | "super premium" | "super premium/signature/infinite" => {
            "signature".to_string()
        }
        _ => tier,
    }
}

/// Format a rate without a trailing ".0" on whole numbers.
pub(crate) fn trim_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreditScoreBand, MonthlySpend};

    fn test_card() -> CreditCard {
        serde_json::from_value(serde_json::json!({
            "card_id": "hdfc001",
            "card_name": "HDFC Regalia Gold",
            "issuer": "HDFC Bank",
            "card_type": "rewards",
            "card_tier": "Gold",
            "annual_fee": 1000.0,
            "interest_rate": 42.0,
            "forex_markup": 2.0,
            "fee_waiver_condition": "Annual fee waived on spending ₹3,00,000 in the previous year",
            "reward_rate": 4.0,
            "reward_categories": ["travel", "dining", "shopping"],
            "lounge_access": true,
            "lounge_access_count": 8,
            "fuel_surcharge_waiver": true,
            "dining_benefits": true,
            "travel_benefits": true,
            "min_income": 600000.0,
            "min_age": 21,
            "credit_score_required": 750,
            "employment_type": ["Salaried", "Self-employed Professional"],
            "popularity_score": 8.5
        }))
        .unwrap()
    }

    fn test_preferences() -> UserPreferences {
        serde_json::from_value(serde_json::json!({
            "annual_income": 800000.0,
            "employment_type": "Salaried",
            "age": 30,
            "credit_score": "750-800",
            "primary_spending_categories": ["Online Shopping", "Dining", "Travel"],
            "monthly_card_spend": "₹25,000 - ₹50,000",
            "international_transactions": true,
            "fee_preference": "Low annual fee with better benefits",
            "reward_preference": "Reward Points",
            "travel_frequency": "Occasionally",
            "lounge_access_importance": "Somewhat important",
            "preferred_banks": ["HDFC Bank", "ICICI Bank"],
            "existing_relationship": ["HDFC Bank"],
            "existing_cards": true,
            "preferred_card_tier": "Gold/Classic"
        }))
        .unwrap()
    }

    #[test]
    fn test_fee_score_low_fee_preference() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        let score = score_fees(&test_card(), &test_preferences(), &weights, &mut reasons);

        // 0.8 * annual_fee_match for the low fee, plus the waiver factor
        // (₹37,500/month estimate clears the annual spend threshold)
        assert_eq!(score, weights.annual_fee_match * 0.8 + weights.fee_waiver_match);
        assert!(reasons.contains(&"Low annual fee".to_string()));
        assert!(reasons
            .iter()
            .any(|r| r == "Likely eligible for fee waiver based on spending"));
    }

    #[test]
    fn test_fee_waiver_needs_spend() {
        let weights = WeightFactors::default();
        let mut prefs = test_preferences();
        prefs.monthly_card_spend = MonthlySpend::UpTo10k;
        let mut reasons = Vec::new();
        score_fees(&test_card(), &prefs, &weights, &mut reasons);
        assert!(!reasons
            .iter()
            .any(|r| r == "Likely eligible for fee waiver based on spending"));
    }

    #[test]
    fn test_reward_points_reason() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        let score = score_rewards(&test_card(), &test_preferences(), &weights, &mut reasons);

        assert!(score > 0.0);
        assert!(reasons.contains(&"Offers reward points at 4 points per ₹100".to_string()));
    }

    #[test]
    fn test_spending_category_overlap_all_matched() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        // "Online Shopping" -> shopping, "Dining" -> dining, "Travel" -> travel:
        // all three present on the card, so the overlap is total.
        score_rewards(&test_card(), &test_preferences(), &weights, &mut reasons);
        assert!(reasons.contains(&"Excellent match for your spending categories".to_string()));
    }

    #[test]
    fn test_travel_and_lounge_and_forex() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        let score = score_travel(&test_card(), &test_preferences(), &weights, &mut reasons);

        let expected = weights.travel_benefits_match * 0.7
            + weights.lounge_access_match * 0.7
            + weights.forex_markup_value;
        assert!((score - expected).abs() < 1e-9);
        assert!(reasons.contains(&"Low forex markup at 2%".to_string()));
        assert!(reasons.contains(&"Offers airport lounge access".to_string()));
    }

    #[test]
    fn test_lounge_count_in_reason_when_very_important() {
        let weights = WeightFactors::default();
        let mut prefs = test_preferences();
        prefs.lounge_access_importance = LoungeImportance::VeryImportant;
        let mut reasons = Vec::new();
        score_travel(&test_card(), &prefs, &weights, &mut reasons);
        assert!(reasons.contains(&"Offers 8 complimentary lounge visits per year".to_string()));
    }

    #[test]
    fn test_issuer_scores() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        let score = score_issuer(&test_card(), &test_preferences(), &weights, &mut reasons);
        assert_eq!(
            score,
            weights.preferred_bank_match + weights.existing_relationship_match
        );
        assert!(reasons.contains(&"Card from your preferred bank: HDFC Bank".to_string()));
    }

    #[test]
    fn test_tier_normalization_match() {
        let weights = WeightFactors::default();
        let mut reasons = Vec::new();
        // Card tier "Gold" vs preference "Gold/Classic" normalize to the same tier
        let score = score_tier(&test_card(), &test_preferences(), &weights, &mut reasons);
        assert_eq!(score, weights.card_tier_match);
    }

    #[test]
    fn test_starter_card_boost() {
        let weights = WeightFactors::default();
        let mut card = test_card();
        card.card_tier = "Basic".to_string();
        let mut prefs = test_preferences();
        prefs.existing_cards = false;
        prefs.preferred_card_tier = None;
        let mut reasons = Vec::new();
        let score = score_extras(&card, &prefs, &weights, &mut reasons);
        assert_eq!(
            score,
            weights.popularity_score + weights.complementary_to_existing_cards
        );
        assert!(reasons.contains(&"Good starter card for first-time users".to_string()));
    }

    #[test]
    fn test_score_card_total_is_sum_of_facets() {
        let weights = WeightFactors::default();
        let card = test_card();
        let prefs = test_preferences();

        let (total, reasons) = score_card(&card, &prefs, &weights);
        assert!(total > 0.0);
        assert!(total <= weights.max_total());
        assert!(!reasons.is_empty());
    }

    #[test]
    fn test_normalize_category_synonyms() {
        assert_eq!(normalize_category("Online Shopping"), "shopping");
        assert_eq!(normalize_category("Restaurants"), "dining");
        assert_eq!(normalize_category("Petrol"), "fuel");
        assert_eq!(normalize_category("Utilities"), "bills");
        assert_eq!(normalize_category("Insurance"), "insurance");
    }

    #[test]
    fn test_normalize_tier_synonyms() {
        assert_eq!(normalize_tier("Entry-Level"), "basic");
        assert_eq!(normalize_tier("Gold/Classic"), "gold");
        assert_eq!(normalize_tier("Super Premium"), "signature");
    }

    #[test]
    fn test_trim_decimal() {
        assert_eq!(trim_decimal(2.0), "2");
        assert_eq!(trim_decimal(1.25), "1.25");
    }

    #[test]
    fn test_unknown_credit_band_does_not_affect_scoring() {
        let weights = WeightFactors::default();
        let mut prefs = test_preferences();
        prefs.credit_score = CreditScoreBand::DontKnow;
        let (with_unknown, _) = score_card(&test_card(), &prefs, &weights);
        let (with_band, _) = score_card(&test_card(), &test_preferences(), &weights);
        assert_eq!(with_unknown, with_band);
    }
}
