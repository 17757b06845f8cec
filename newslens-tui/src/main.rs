//! NewsLens TUI
//!
//! Single-page submission form in the Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: analysis dispatch (`backend/`)
//!
//! The main loop stays synchronous; the analysis request runs on a tokio
//! runtime and reports back through an unbounded channel drained each tick.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::AnalysisService;
use newslens_core::PredictorConfig;
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. Async runtime for the analysis tasks
    let runtime = tokio::runtime::Runtime::new()?;

    // 2. Predictor configuration from the environment
    let config = PredictorConfig::from_env();

    // 3. Completion channel: analysis tasks -> main loop
    let (completion_tx, completion_rx) = mpsc::unbounded_channel();
    let backend = AnalysisService::new(runtime.handle().clone(), &config, completion_tx)?;

    // 4. Initialize terminal
    let mut terminal = init_terminal()?;

    // 5. Create the application instance and run the main loop
    let mut app = model::App::new(backend, completion_rx);
    let result = app::run(&mut terminal, &mut app);

    // 6. Restore the terminal whether or not the loop succeeded
    restore_terminal(&mut terminal)?;

    result
}
