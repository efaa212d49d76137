use crate::models::{CreditCard, UserPreferences};

/// Check whether the user clears a card's income requirement.
#[inline]
pub fn meets_income(card: &CreditCard, preferences: &UserPreferences) -> bool {
    preferences.annual_income >= card.min_income
}

/// Check whether the user's age falls inside the card's age window.
/// A `max_age` of 0 means the card has no upper limit.
#[inline]
pub fn meets_age(card: &CreditCard, preferences: &UserPreferences) -> bool {
    if preferences.age < card.min_age {
        return false;
    }
    if card.max_age > 0 && preferences.age > card.max_age {
        return false;
    }
    true
}

/// Check the self-reported credit score band against the card's
/// requirement. Users who don't know their score are not filtered out.
#[inline]
pub fn meets_credit_score(card: &CreditCard, preferences: &UserPreferences) -> bool {
    match preferences.credit_score.floor() {
        Some(floor) => floor >= card.credit_score_required,
        None => true,
    }
}

/// Check the user's employment type against the card's eligible set.
/// Cards with no employment restriction accept everyone.
#[inline]
pub fn meets_employment(card: &CreditCard, preferences: &UserPreferences) -> bool {
    if preferences.employment_type.is_empty() || card.employment_type.is_empty() {
        return true;
    }
    card.employment_type.contains(&preferences.employment_type)
}

/// Hard eligibility gate applied before any scoring.
pub fn is_eligible(card: &CreditCard, preferences: &UserPreferences) -> bool {
    meets_income(card, preferences)
        && meets_age(card, preferences)
        && meets_credit_score(card, preferences)
        && meets_employment(card, preferences)
}
