//! Message layer: the bridge between Event and Update
//!
//! Every user action and state change is expressed as a message; the update
//! layer consumes them and is the only place that mutates the model.

use newslens_core::{CoreResult, PredictionResponse};

/// Application message
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Type a character into the text area
    Input(char),

    /// Bracketed paste into the text area
    Paste(String),

    /// Delete the character before the cursor
    Backspace,

    /// Validate the input and dispatch an analysis request
    Submit,

    /// Reset input, predictions and errors; cancels an in-flight request
    Clear,

    /// An analysis task finished. The generation stamp identifies which
    /// submission it belongs to so stale completions can be discarded.
    AnalysisCompleted {
        generation: u64,
        result: CoreResult<PredictionResponse>,
    },

    /// Clear the status bar message
    ClearStatus,

    /// No operation (ignored events)
    Noop,
}
