use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::Client;

use crate::models::{RecommendPayload, UserPreferences};
use crate::view::render::OfferRenderer;
use crate::view::state::ViewState;
use crate::view::ViewError;

/// The preference wizard's final step, which must validate before a
/// request is dispatched.
pub const FINAL_STEP: u8 = 5;

/// Collaborator contract with the surrounding preference form wizard.
pub trait PreferenceForm {
    /// Whether the given wizard step has been completed with valid input.
    fn step_complete(&self, step: u8) -> bool;

    /// The preferences assembled from the form fields.
    fn preferences(&self) -> UserPreferences;
}

/// One presentation step of a dispatch cycle: the view state to switch
/// to and the fragment to place in the results container (replacing any
/// prior content).
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub state: ViewState,
    pub html: String,
}

/// Dispatches collected preferences to the recommendation endpoint and
/// renders the outcome.
///
/// A cycle is: validate the final form step, present the loading view,
/// issue exactly one POST, then present either the rendered offers or an
/// inline error. Both application-level failures (`success: false`) and
/// transport failures surface as the same inline error fragment. There
/// are no retries; the first response is terminal. An in-flight guard
/// rejects re-entrant submission until the current cycle completes.
pub struct RecommendClient {
    http: Client,
    base_url: String,
    renderer: OfferRenderer,
    in_flight: AtomicBool,
}

impl RecommendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ViewError> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            renderer: OfferRenderer::new()?,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Run one submit cycle.
    ///
    /// `present` receives each view transition in order: first the
    /// loading view, then the terminal result view. Returns false, with
    /// no side effects and no request issued, when the final form step
    /// does not validate or another cycle is already in flight.
    pub async fn submit_preferences<F>(&self, form: &dyn PreferenceForm, mut present: F) -> bool
    where
        F: FnMut(&CycleOutcome),
    {
        if !form.step_complete(FINAL_STEP) {
            return false;
        }

        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!("Ignoring submission: a request cycle is already in flight");
            return false;
        }

        let preferences = form.preferences();

        present(&CycleOutcome {
            state: ViewState::Loading,
            html: self
                .renderer
                .render_loading()
                .unwrap_or_else(|_| String::new()),
        });

        let html = match self.fetch(&preferences).await {
            Ok(payload) if payload.success => {
                match self.renderer.render_offers(&payload.recommendations) {
                    Ok(html) => html,
                    Err(e) => self.error_fragment(&e.to_string()),
                }
            }
            Ok(payload) => {
                let message = payload
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string());
                self.error_fragment(&message)
            }
            Err(e) => self.error_fragment(&e.to_string()),
        };

        present(&CycleOutcome {
            state: ViewState::ResultsVisible,
            html,
        });

        self.in_flight.store(false, Ordering::Release);
        true
    }

    /// Whether a request cycle is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    async fn fetch(&self, preferences: &UserPreferences) -> Result<RecommendPayload, reqwest::Error> {
        let url = format!("{}/api/recommend", self.base_url.trim_end_matches('/'));

        self.http
            .post(&url)
            .json(preferences)
            .send()
            .await?
            .json::<RecommendPayload>()
            .await
    }

    fn error_fragment(&self, message: &str) -> String {
        self.renderer.render_error(message).unwrap_or_else(|e| {
            tracing::error!("Failed to render error fragment: {}", e);
            format!(
                r#"<div class="alert alert-danger">Error: {}</div>"#,
                handlebars::html_escape(message)
            )
        })
    }
}
