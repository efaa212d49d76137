use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::CreditCard;

/// Errors that can occur while loading the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory credit card catalog.
///
/// Loaded once at startup from a JSON file; when no file is configured
/// (or the configured file is absent) the built-in seed set is used so
/// the service always has cards to recommend.
pub struct CardCatalog {
    cards: Vec<CreditCard>,
}

impl CardCatalog {
    /// Load the catalog from `path`, falling back to the seed set when
    /// no path is given or the file does not exist. A file that exists
    /// but fails to parse is an error, not a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) if p.exists() => {
                let raw = std::fs::read_to_string(p)?;
                let cards: Vec<CreditCard> = serde_json::from_str(&raw)?;
                info!("Loaded {} cards from {}", cards.len(), p.display());
                Ok(Self { cards })
            }
            Some(p) => {
                warn!(
                    "Catalog file {} not found, using built-in seed cards",
                    p.display()
                );
                Ok(Self::with_seed_cards())
            }
            None => {
                info!("No catalog file configured, using built-in seed cards");
                Ok(Self::with_seed_cards())
            }
        }
    }

    pub fn with_seed_cards() -> Self {
        Self { cards: seed_cards() }
    }

    pub fn from_cards(cards: Vec<CreditCard>) -> Self {
        Self { cards }
    }

    pub fn all(&self) -> &[CreditCard] {
        &self.cards
    }

    pub fn get(&self, card_id: &str) -> Option<&CreditCard> {
        self.cards.iter().find(|c| c.card_id == card_id)
    }

    /// Distinct issuers, sorted.
    pub fn issuers(&self) -> Vec<String> {
        let mut issuers: Vec<String> = self.cards.iter().map(|c| c.issuer.clone()).collect();
        issuers.sort();
        issuers.dedup();
        issuers
    }

    /// Distinct card types, sorted.
    pub fn card_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.cards.iter().map(|c| c.card_type.clone()).collect();
        types.sort();
        types.dedup();
        types
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Built-in catalog covering the common issuer/tier/reward combinations.
fn seed_cards() -> Vec<CreditCard> {
    vec![
        CreditCard {
            card_id: "hdfc_regalia".to_string(),
            card_name: "HDFC Regalia Credit Card".to_string(),
            issuer: "HDFC Bank".to_string(),
            card_type: "rewards".to_string(),
            card_tier: "Premium".to_string(),
            joining_fee: 2500.0,
            annual_fee: 2500.0,
            interest_rate: 45.0,
            forex_markup: 2.0,
            fee_waiver_condition: Some(
                "Annual fee waived on spending ₹3,00,000 in the previous year".to_string(),
            ),
            reward_rate: 4.0,
            cashback_rate: 0.0,
            reward_categories: vec![
                "travel".to_string(),
                "dining".to_string(),
                "shopping".to_string(),
            ],
            lounge_access: true,
            lounge_access_count: 12,
            fuel_surcharge_waiver: true,
            movie_benefits: true,
            dining_benefits: true,
            travel_benefits: true,
            shopping_benefits: true,
            welcome_benefits: Some(
                "10,000 reward points on spending ₹1,00,000 in the first 90 days".to_string(),
            ),
            min_income: 1200000.0,
            min_age: 21,
            max_age: 65,
            credit_score_required: 750,
            employment_type: vec![
                "Salaried".to_string(),
                "Self-employed Professional".to_string(),
            ],
            card_description: "HDFC Regalia is a premium credit card offering comprehensive \
                travel benefits, dining privileges, and reward points on all spends."
                .to_string(),
            card_image_url: "https://www.hdfcbank.com/cards/regalia-card.png".to_string(),
            apply_url: "https://www.hdfcbank.com/personal/pay/cards/credit-cards/regalia-credit-card"
                .to_string(),
            popularity_score: 8.7,
        },
        CreditCard {
            card_id: "hdfc_millenia".to_string(),
            card_name: "HDFC Millenia Credit Card".to_string(),
            issuer: "HDFC Bank".to_string(),
            card_type: "rewards".to_string(),
            card_tier: "Gold".to_string(),
            joining_fee: 1000.0,
            annual_fee: 1000.0,
            interest_rate: 45.0,
            forex_markup: 3.5,
            fee_waiver_condition: Some(
                "Annual fee waived on spending ₹1,00,000 in the previous year".to_string(),
            ),
            reward_rate: 5.0,
            cashback_rate: 0.0,
            reward_categories: vec![
                "online".to_string(),
                "dining".to_string(),
                "shopping".to_string(),
            ],
            lounge_access: true,
            lounge_access_count: 8,
            fuel_surcharge_waiver: true,
            movie_benefits: true,
            dining_benefits: true,
            travel_benefits: false,
            shopping_benefits: true,
            welcome_benefits: Some(
                "1,000 reward points on spending ₹1,000 in the first 30 days".to_string(),
            ),
            min_income: 600000.0,
            min_age: 21,
            max_age: 65,
            credit_score_required: 700,
            employment_type: vec![
                "Salaried".to_string(),
                "Self-employed Professional".to_string(),
                "Business Owner".to_string(),
            ],
            card_description: "HDFC Millenia offers accelerated rewards on online spends, \
                dining, and shopping, making it ideal for digital-first customers."
                .to_string(),
            card_image_url: "https://www.hdfcbank.com/cards/millennia-card.png".to_string(),
            apply_url:
                "https://www.hdfcbank.com/personal/pay/cards/credit-cards/millennia-credit-card"
                    .to_string(),
            popularity_score: 8.5,
        },
        CreditCard {
            card_id: "hdfc_moneyback".to_string(),
            card_name: "HDFC MoneyBack Credit Card".to_string(),
            issuer: "HDFC Bank".to_string(),
            card_type: "cashback".to_string(),
            card_tier: "Classic".to_string(),
            joining_fee: 500.0,
            annual_fee: 500.0,
            interest_rate: 45.0,
            forex_markup: 3.5,
            fee_waiver_condition: Some(
                "Annual fee waived on spending ₹50,000 in the previous year".to_string(),
            ),
            reward_rate: 2.0,
            cashback_rate: 0.0,
            reward_categories: vec!["online".to_string(), "bills".to_string()],
            lounge_access: false,
            lounge_access_count: 0,
            fuel_surcharge_waiver: true,
            movie_benefits: false,
            dining_benefits: false,
            travel_benefits: false,
            shopping_benefits: true,
            welcome_benefits: Some("500 cash points on first swipe".to_string()),
            min_income: 300000.0,
            min_age: 21,
            max_age: 60,
            credit_score_required: 650,
            employment_type: vec![
                "Salaried".to_string(),
                "Self-employed Professional".to_string(),
                "Business Owner".to_string(),
            ],
            card_description: "An entry-level cashback card that converts everyday online \
                spends into cash points."
                .to_string(),
            card_image_url: "https://www.hdfcbank.com/cards/moneyback-card.png".to_string(),
            apply_url:
                "https://www.hdfcbank.com/personal/pay/cards/credit-cards/moneyback-credit-card"
                    .to_string(),
            popularity_score: 7.4,
        },
        CreditCard {
            card_id: "sbi_simplyclick".to_string(),
            card_name: "SBI SimplyCLICK Credit Card".to_string(),
            issuer: "SBI Card".to_string(),
            card_type: "cashback".to_string(),
            card_tier: "Basic".to_string(),
            joining_fee: 499.0,
            annual_fee: 499.0,
            interest_rate: 45.0,
            forex_markup: 3.5,
            fee_waiver_condition: Some(
                "Annual fee reversed on spending ₹1,00,000 in a year".to_string(),
            ),
            reward_rate: 0.0,
            cashback_rate: 1.25,
            reward_categories: vec!["online shopping".to_string(), "entertainment".to_string()],
            lounge_access: false,
            lounge_access_count: 0,
            fuel_surcharge_waiver: true,
            movie_benefits: true,
            dining_benefits: false,
            travel_benefits: false,
            shopping_benefits: true,
            welcome_benefits: Some("Amazon gift card worth ₹500 on joining".to_string()),
            min_income: 300000.0,
            min_age: 21,
            max_age: 70,
            credit_score_required: 700,
            employment_type: vec![
                "Salaried".to_string(),
                "Self-employed Professional".to_string(),
                "Business Owner".to_string(),
            ],
            card_description: "SBI SimplyCLICK rewards online shopping and entertainment \
                spends with accelerated cashback."
                .to_string(),
            card_image_url: "https://www.sbicard.com/cards/simplyclick-card.png".to_string(),
            apply_url: "https://www.sbicard.com/en/personal/credit-cards/shopping/simplyclick-sbi-card.page"
                .to_string(),
            popularity_score: 7.8,
        },
        CreditCard {
            card_id: "axis_ace".to_string(),
            card_name: "Axis Bank ACE Credit Card".to_string(),
            issuer: "Axis Bank".to_string(),
            card_type: "cashback".to_string(),
            card_tier: "Basic".to_string(),
            joining_fee: 0.0,
            annual_fee: 0.0,
            interest_rate: 52.9,
            forex_markup: 3.5,
            fee_waiver_condition: None,
            reward_rate: 0.0,
            cashback_rate: 2.0,
            reward_categories: vec!["bills".to_string(), "groceries".to_string()],
            lounge_access: true,
            lounge_access_count: 4,
            fuel_surcharge_waiver: true,
            movie_benefits: false,
            dining_benefits: true,
            travel_benefits: false,
            shopping_benefits: false,
            welcome_benefits: None,
            min_income: 300000.0,
            min_age: 18,
            max_age: 70,
            credit_score_required: 700,
            employment_type: vec!["Salaried".to_string(), "Self-employed Professional".to_string()],
            card_description: "Axis ACE offers flat cashback on bill payments and groceries \
                with no annual fee."
                .to_string(),
            card_image_url: "https://www.axisbank.com/cards/ace-card.png".to_string(),
            apply_url: "https://www.axisbank.com/retail/cards/credit-card/ace-credit-card"
                .to_string(),
            popularity_score: 8.1,
        },
    ]
}
