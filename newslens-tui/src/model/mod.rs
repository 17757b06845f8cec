//! Model layer: application state

mod app;
mod state;

pub use app::App;
pub use state::AnalysisState;
