/// View state of the recommendation page.
///
/// Exactly one state is active at a time; the three page regions derive
/// their visibility from it rather than being toggled ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The preference form and its progress bar are shown.
    FormVisible,
    /// A request is in flight; the results region shows a progress
    /// indicator.
    Loading,
    /// The results region shows offers or an inline error.
    ResultsVisible,
}

/// Visibility of the three collaborating page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionVisibility {
    pub preference_form: bool,
    pub results_section: bool,
    pub progress_bar: bool,
}

impl ViewState {
    /// Map the state onto region visibility.
    pub fn regions(&self) -> RegionVisibility {
        match self {
            ViewState::FormVisible => RegionVisibility {
                preference_form: true,
                results_section: false,
                progress_bar: true,
            },
            ViewState::Loading | ViewState::ResultsVisible => RegionVisibility {
                preference_form: false,
                results_section: true,
                progress_bar: false,
            },
        }
    }
}
