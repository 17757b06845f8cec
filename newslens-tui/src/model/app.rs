//! Application main state structure

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use newslens_core::ValidationError;

use super::AnalysisState;
use crate::backend::AnalysisService;
use crate::message::AppMessage;

/// Frames for the loading spinner, advanced once per main-loop tick
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application main state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,

    /// News text being edited
    pub input: String,

    /// Validation errors from the last submit attempt; cleared on edit
    pub validation_errors: Vec<ValidationError>,

    /// Submission state machine
    pub analysis: AnalysisState,

    /// Status bar message
    pub status_message: Option<String>,

    /// Stamp for the current submission. Completions carrying an older
    /// stamp are discarded.
    pub generation: u64,

    /// Handle of the in-flight analysis task, if any
    pub inflight: Option<JoinHandle<()>>,

    /// Loading animation frame index
    spinner_frame: usize,

    /// Analysis dispatch service
    pub backend: AnalysisService,

    /// Completions sent back by analysis tasks
    completion_rx: UnboundedReceiver<AppMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(backend: AnalysisService, completion_rx: UnboundedReceiver<AppMessage>) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            validation_errors: Vec::new(),
            analysis: AnalysisState::default(),
            status_message: None,
            generation: 0,
            inflight: None,
            spinner_frame: 0,
            backend,
            completion_rx,
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Next completion from the analysis tasks, if one is waiting
    pub fn try_recv_completion(&mut self) -> Option<AppMessage> {
        self.completion_rx.try_recv().ok()
    }

    /// Advance per-tick animation state
    pub fn tick(&mut self) {
        if self.analysis.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Character count shown in the editor counter
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Whether the submit action is currently available
    pub fn can_submit(&self) -> bool {
        !self.analysis.is_loading() && !self.input.trim().is_empty()
    }
}
