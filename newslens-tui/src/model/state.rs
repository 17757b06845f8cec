//! Submission state machine

use newslens_core::PredictionResponse;

/// The four UI states of the submission form. Exactly one holds at a time.
///
/// Transitions (driven by the update layer):
/// Idle -(submit, valid)-> Loading -(ok)-> Success
/// Loading -(err)-> Failure
/// Success/Failure -(edit input)-> Idle (text kept)
/// Success/Failure -(clear)-> Idle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Success(PredictionResponse),
    Failure(String),
}

impl AnalysisState {
    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }
}
