// View layer: offer rendering and the request/render dispatch cycle
pub mod dispatch;
pub mod render;
pub mod state;

use thiserror::Error;

/// Errors raised by the view layer.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub use dispatch::{CycleOutcome, PreferenceForm, RecommendClient};
pub use render::{match_percent, OfferRenderer};
pub use state::{RegionVisibility, ViewState};
