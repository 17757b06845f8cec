//! NewsLens Core Library
//!
//! Provides the business logic shared by NewsLens front ends:
//! - Input validation (`validate`)
//! - Prediction wire types (`types`)
//! - Result projection and consensus (`analysis`)
//! - Predictor HTTP client (`client`)
//!
//! This library is UI-independent; the TUI front end consumes it through
//! `PredictorClient` and the pure functions re-exported below.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validate;

// Re-export common types
pub use analysis::{consensus, derive_results};
pub use client::PredictorClient;
pub use config::PredictorConfig;
pub use error::{CoreError, CoreResult};
pub use types::{Consensus, Label, ModelKind, ModelResult, PredictionResponse, Tone};
pub use validate::{validate, ValidationError, ValidationErrorKind};
