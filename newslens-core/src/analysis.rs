//! Result projection and consensus aggregation

use crate::types::{Consensus, Label, ModelKind, ModelResult, PredictionResponse, Tone};

/// Project a response into display-ready records.
///
/// Total and order-preserving: always yields exactly one entry per model,
/// in [`ModelKind::all`] order.
pub fn derive_results(response: &PredictionResponse) -> Vec<ModelResult> {
    ModelKind::all()
        .iter()
        .map(|&model| {
            let label = response.label_for(model);
            ModelResult {
                model,
                label,
                tone: Tone::from(label),
            }
        })
        .collect()
}

/// Majority vote across model results.
///
/// Takes a slice rather than a fixed array so the aggregation keeps working
/// if the predictor grows more models. Equal counts yield `Uncertain`.
pub fn consensus(results: &[ModelResult]) -> Consensus {
    let total = results.len();
    let real = results.iter().filter(|r| r.label == Label::Real).count();
    let fake = total - real;

    match real.cmp(&fake) {
        std::cmp::Ordering::Greater => Consensus::LikelyLegitimate { real, total },
        std::cmp::Ordering::Less => Consensus::LikelyFake { fake, total },
        std::cmp::Ordering::Equal => Consensus::Uncertain,
    }
}
