use handlebars::Handlebars;
use serde_json::json;

use crate::core::scoring::trim_decimal;
use crate::models::ScoredCard;
use crate::view::ViewError;

/// One offer block with header, badges and the three collapsible
/// detail sections, scoped by card id.
const CARD_TEMPLATE: &str = r##"<div class="card-result">
  <div class="card-header d-flex justify-content-between align-items-center">
    <h4>{{card_name}}</h4>
    <div class="match-score">{{match_percent}}% Match</div>
  </div>
  <div class="card-body">
    <div class="row">
      <div class="col-md-4 text-center mb-3">
        <img src="{{card_image_url}}" alt="{{card_name}}" class="card-image mb-3">
        <a href="{{apply_url}}" target="_blank" class="btn btn-success w-100">Apply Now</a>
      </div>
      <div class="col-md-8">
        <p>{{card_description}}</p>
        <h5>Why this card matches your preferences:</h5>
        <div class="match-reasons mb-3">
          {{#each match_reasons}}<div class="match-reason">{{this}}</div>{{/each}}
        </div>
        <h5>Key Features:</h5>
        <div class="card-features">
          <span class="feature-badge">Issuer: {{issuer}}</span>
          <span class="feature-badge">Annual Fee: ₹{{annual_fee}}</span>
          {{#if show_reward_rate}}<span class="feature-badge">Reward Rate: {{reward_rate}}X</span>{{/if}}
          {{#if show_cashback_rate}}<span class="feature-badge">Cashback: {{cashback_rate}}%</span>{{/if}}
          {{#if lounge_access}}<span class="feature-badge">Lounge Access: {{lounge_access_count}} visits/year</span>{{/if}}
          <span class="feature-badge">Card Tier: {{card_tier}}</span>
        </div>
        <div class="accordion mt-4" id="accordion-{{card_id}}">
          <div class="accordion-item">
            <h2 class="accordion-header">
              <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-fees-{{card_id}}">
                Fees &amp; Charges
              </button>
            </h2>
            <div id="collapse-fees-{{card_id}}" class="accordion-collapse collapse" data-bs-parent="#accordion-{{card_id}}">
              <div class="accordion-body">
                <ul class="list-group list-group-flush">
                  <li class="list-group-item d-flex justify-content-between"><span>Joining Fee:</span><span>₹{{joining_fee}}</span></li>
                  <li class="list-group-item d-flex justify-content-between"><span>Annual Fee:</span><span>₹{{annual_fee}}</span></li>
                  <li class="list-group-item d-flex justify-content-between"><span>Interest Rate:</span><span>{{interest_rate}}% p.a.</span></li>
                  <li class="list-group-item d-flex justify-content-between"><span>Forex Markup:</span><span>{{forex_markup}}%</span></li>
                  <li class="list-group-item"><span>Fee Waiver:</span><span>{{fee_waiver}}</span></li>
                </ul>
              </div>
            </div>
          </div>
          <div class="accordion-item">
            <h2 class="accordion-header">
              <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-benefits-{{card_id}}">
                Benefits &amp; Rewards
              </button>
            </h2>
            <div id="collapse-benefits-{{card_id}}" class="accordion-collapse collapse" data-bs-parent="#accordion-{{card_id}}">
              <div class="accordion-body">
                <ul class="list-group list-group-flush">
                  <li class="list-group-item"><strong>Welcome Benefits:</strong><p>{{welcome_benefits}}</p></li>
                  <li class="list-group-item"><strong>Reward Categories:</strong><p>{{reward_categories}}</p></li>
                  <li class="list-group-item"><strong>Travel Benefits:</strong><p>{{travel_benefits}}</p></li>
                  <li class="list-group-item"><strong>Dining Benefits:</strong><p>{{dining_benefits}}</p></li>
                  <li class="list-group-item"><strong>Shopping Benefits:</strong><p>{{shopping_benefits}}</p></li>
                </ul>
              </div>
            </div>
          </div>
          <div class="accordion-item">
            <h2 class="accordion-header">
              <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#collapse-eligibility-{{card_id}}">
                Eligibility Criteria
              </button>
            </h2>
            <div id="collapse-eligibility-{{card_id}}" class="accordion-collapse collapse" data-bs-parent="#accordion-{{card_id}}">
              <div class="accordion-body">
                <ul class="list-group list-group-flush">
                  <li class="list-group-item d-flex justify-content-between"><span>Minimum Income:</span><span>₹{{min_income}}/year</span></li>
                  <li class="list-group-item d-flex justify-content-between"><span>Minimum Age:</span><span>{{min_age}} years</span></li>
                  <li class="list-group-item d-flex justify-content-between"><span>Credit Score Required:</span><span>{{credit_score_required}}</span></li>
                  <li class="list-group-item"><span>Employment Types:</span><span>{{employment_types}}</span></li>
                </ul>
              </div>
            </div>
          </div>
        </div>
      </div>
    </div>
  </div>
</div>"##;

const EMPTY_TEMPLATE: &str = r#"<div class="alert alert-info">No credit cards match your preferences. Please try adjusting your criteria.</div>"#;

const ERROR_TEMPLATE: &str = r#"<div class="alert alert-danger">Error: {{message}}</div>"#;

const LOADING_TEMPLATE: &str = r#"<div class="text-center my-5"><div class="spinner-border text-primary" role="status"></div><p class="mt-3">Finding the best credit cards for you...</p></div>"#;

/// Display percentage for a 0-10 match score: scale by ten, clamp to
/// [0, 100], round to the nearest integer.
pub fn match_percent(score: f64) -> u32 {
    let percent = (score * 10.0).min(100.0);
    if percent <= 0.0 {
        0
    } else {
        percent.round() as u32
    }
}

/// Renders offers, notices and inline errors into HTML fragments.
///
/// All interpolated values go through the template engine, which escapes
/// HTML by default, so card data and server-supplied error text cannot
/// inject markup.
pub struct OfferRenderer {
    hb: Handlebars<'static>,
}

impl OfferRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut hb = Handlebars::new();
        hb.register_template_string("card", CARD_TEMPLATE)?;
        hb.register_template_string("empty", EMPTY_TEMPLATE)?;
        hb.register_template_string("error", ERROR_TEMPLATE)?;
        hb.register_template_string("loading", LOADING_TEMPLATE)?;
        Ok(Self { hb })
    }

    /// Render the full results fragment. The output replaces any prior
    /// content wholesale. An empty offer list produces a single
    /// informational notice and no card blocks.
    pub fn render_offers(&self, offers: &[ScoredCard]) -> Result<String, ViewError> {
        if offers.is_empty() {
            return Ok(self.hb.render("empty", &json!({}))?);
        }

        let mut out = String::new();
        for offer in offers {
            out.push_str(&self.hb.render("card", &card_context(offer))?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Render an inline error fragment with the given message.
    pub fn render_error(&self, message: &str) -> Result<String, ViewError> {
        Ok(self.hb.render("error", &json!({ "message": message }))?)
    }

    /// Render the progress indicator shown while a request is in flight.
    pub fn render_loading(&self) -> Result<String, ViewError> {
        Ok(self.hb.render("loading", &json!({}))?)
    }
}

/// Build the template context for one offer, with display formatting
/// and placeholder fallbacks applied.
fn card_context(offer: &ScoredCard) -> serde_json::Value {
    let card = &offer.card;
    json!({
        "card_id": card.card_id,
        "card_name": card.card_name,
        "card_description": card.card_description,
        "card_image_url": card.card_image_url,
        "apply_url": card.apply_url,
        "issuer": card.issuer,
        "card_tier": card.card_tier,
        "match_percent": match_percent(offer.match_score),
        "match_reasons": offer.match_reasons,
        "joining_fee": trim_decimal(card.joining_fee),
        "annual_fee": trim_decimal(card.annual_fee),
        "interest_rate": trim_decimal(card.interest_rate),
        "forex_markup": trim_decimal(card.forex_markup),
        "fee_waiver": card
            .fee_waiver_condition
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Not available"),
        "show_reward_rate": card.reward_rate > 0.0,
        "reward_rate": trim_decimal(card.reward_rate),
        "show_cashback_rate": card.cashback_rate > 0.0,
        "cashback_rate": trim_decimal(card.cashback_rate),
        "lounge_access": card.lounge_access,
        "lounge_access_count": card.lounge_access_count,
        "welcome_benefits": card
            .welcome_benefits
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or("None"),
        "reward_categories": card.reward_categories.join(", "),
        "travel_benefits": yes_no(card.travel_benefits),
        "dining_benefits": yes_no(card.dining_benefits),
        "shopping_benefits": yes_no(card.shopping_benefits),
        "min_income": format_inr(card.min_income),
        "min_age": card.min_age,
        "credit_score_required": card.credit_score_required,
        "employment_types": card.employment_type.join(", "),
    })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Indian-locale digit grouping: the last three digits form one group,
/// the rest group in twos (12,00,000).
fn format_inr(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);

    let mut out = String::new();
    for group in groups.iter().rev() {
        out.push_str(group);
        out.push(',');
    }
    out.push_str(tail);
    out
}
