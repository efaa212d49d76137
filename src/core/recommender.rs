use crate::core::eligibility::is_eligible;
use crate::core::scoring::score_card;
use crate::models::{CreditCard, ScoredCard, UserPreferences, WeightFactors};

/// Result of a recommendation run.
#[derive(Debug)]
pub struct RecommendResult {
    pub offers: Vec<ScoredCard>,
    pub total_considered: usize,
}

/// Recommendation orchestrator.
///
/// # Pipeline
/// 1. Hard eligibility filtering (income, age, credit score, employment)
/// 2. Weighted factor scoring with match reasons
/// 3. Normalization onto the 0-10 match score scale
/// 4. Ranking by score and truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: WeightFactors,
}

impl Recommender {
    pub fn new(weights: WeightFactors) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: WeightFactors::default(),
        }
    }

    /// Rank the catalog against the user's preferences.
    ///
    /// Ineligible cards are dropped entirely; eligible cards are scored,
    /// sorted by match score descending (stable, so equal scores keep
    /// catalog order) and truncated to `limit`.
    pub fn recommend(
        &self,
        preferences: &UserPreferences,
        cards: &[CreditCard],
        limit: usize,
    ) -> RecommendResult {
        let total_considered = cards.len();
        let scale = self.weights.max_total();

        let mut offers: Vec<ScoredCard> = cards
            .iter()
            .filter(|card| is_eligible(card, preferences))
            .map(|card| {
                let (raw, match_reasons) = score_card(card, preferences, &self.weights);
                let match_score = if scale > 0.0 {
                    (raw / scale * 10.0).clamp(0.0, 10.0)
                } else {
                    0.0
                };

                ScoredCard {
                    card: card.clone(),
                    match_score,
                    match_reasons,
                }
            })
            .collect();

        offers.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        offers.truncate(limit);

        RecommendResult {
            offers,
            total_considered,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_card(id: &str, min_income: f64, popularity: f64) -> CreditCard {
        serde_json::from_value(serde_json::json!({
            "card_id": id,
            "card_name": format!("Card {}", id),
            "issuer": "Test Bank",
            "card_tier": "Gold",
            "annual_fee": 500.0,
            "reward_rate": 4.0,
            "reward_categories": ["dining", "shopping"],
            "min_income": min_income,
            "min_age": 21,
            "credit_score_required": 700,
            "employment_type": ["Salaried"],
            "popularity_score": popularity
        }))
        .unwrap()
    }

    fn preferences() -> UserPreferences {
        serde_json::from_value(serde_json::json!({
            "annual_income": 600000.0,
            "employment_type": "Salaried",
            "age": 30,
            "credit_score": "750-800",
            "primary_spending_categories": ["Dining", "Shopping"],
            "reward_preference": "Reward Points",
            "fee_preference": "Low annual fee with better benefits"
        }))
        .unwrap()
    }

    #[test]
    fn test_ineligible_cards_filtered() {
        let recommender = Recommender::with_default_weights();
        let cards = vec![
            catalog_card("affordable", 300000.0, 8.0),
            catalog_card("out_of_reach", 1200000.0, 9.0),
        ];

        let result = recommender.recommend(&preferences(), &cards, 10);

        assert_eq!(result.total_considered, 2);
        assert_eq!(result.offers.len(), 1);
        assert_eq!(result.offers[0].card.card_id, "affordable");
    }

    #[test]
    fn test_offers_sorted_by_score() {
        let recommender = Recommender::with_default_weights();
        // Higher popularity earns an extra factor, so "popular" must rank first
        let cards = vec![
            catalog_card("plain", 300000.0, 4.0),
            catalog_card("popular", 300000.0, 8.5),
        ];

        let result = recommender.recommend(&preferences(), &cards, 10);

        assert_eq!(result.offers.len(), 2);
        assert_eq!(result.offers[0].card.card_id, "popular");
        assert!(result.offers[0].match_score > result.offers[1].match_score);
    }

    #[test]
    fn test_scores_on_ten_point_scale() {
        let recommender = Recommender::with_default_weights();
        let cards = vec![catalog_card("a", 300000.0, 8.0)];

        let result = recommender.recommend(&preferences(), &cards, 10);

        for offer in &result.offers {
            assert!(
                offer.match_score >= 0.0 && offer.match_score <= 10.0,
                "score {} out of range",
                offer.match_score
            );
        }
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_default_weights();
        let cards: Vec<CreditCard> = (0..20)
            .map(|i| catalog_card(&format!("c{}", i), 300000.0, 6.0))
            .collect();

        let result = recommender.recommend(&preferences(), &cards, 5);

        assert_eq!(result.offers.len(), 5);
        assert_eq!(result.total_considered, 20);
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::default();
        let result = recommender.recommend(&preferences(), &[], 5);
        assert!(result.offers.is_empty());
        assert_eq!(result.total_considered, 0);
    }

    #[test]
    fn test_match_reasons_preserved_in_order() {
        let recommender = Recommender::with_default_weights();
        let cards = vec![catalog_card("a", 300000.0, 8.0)];

        let result = recommender.recommend(&preferences(), &cards, 10);
        let reasons = &result.offers[0].match_reasons;

        // Fee factors are scored before reward factors
        let fee_pos = reasons.iter().position(|r| r == "Low annual fee");
        let reward_pos = reasons
            .iter()
            .position(|r| r.starts_with("Offers reward points"));
        assert!(fee_pos.is_some() && reward_pos.is_some());
        assert!(fee_pos < reward_pos);
    }
}
