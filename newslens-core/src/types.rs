//! Wire types for the predictor API and their display projections

use serde::{Deserialize, Serialize};

/// Classification label returned by every model.
///
/// Only `"Fake"` and `"Real"` are accepted; anything else is a
/// deserialization error surfaced as [`crate::CoreError::Parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "Fake",
            Label::Real => "Real",
        }
    }
}

/// The three models served by the predictor, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    LogisticRegression,
    RandomForest,
    Xgboost,
}

impl ModelKind {
    /// Get the model's display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::LogisticRegression => "Logistic Regression",
            ModelKind::RandomForest => "Random Forest",
            ModelKind::Xgboost => "XGBoost",
        }
    }

    /// All models, in the fixed order results are rendered in
    pub fn all() -> &'static [ModelKind] {
        &[
            ModelKind::LogisticRegression,
            ModelKind::RandomForest,
            ModelKind::Xgboost,
        ]
    }
}

/// Request body for `POST /predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    pub text: String,
}

/// Successful response body from `POST /predict`.
///
/// Field names match the predictor's JSON contract exactly. All three
/// fields are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Logistic Regression Prediction")]
    pub logistic_regression: Label,

    #[serde(rename = "Random Forest Prediction")]
    pub random_forest: Label,

    #[serde(rename = "XGBoost Prediction")]
    pub xgboost: Label,
}

impl PredictionResponse {
    /// Label predicted by the given model
    pub fn label_for(&self, model: ModelKind) -> Label {
        match model {
            ModelKind::LogisticRegression => self.logistic_regression,
            ModelKind::RandomForest => self.random_forest,
            ModelKind::Xgboost => self.xgboost,
        }
    }
}

/// Presentation tone, a pure function of the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Real news: positive styling
    Positive,
    /// Fake news: negative styling
    Negative,
}

impl From<Label> for Tone {
    fn from(label: Label) -> Self {
        match label {
            Label::Real => Tone::Positive,
            Label::Fake => Tone::Negative,
        }
    }
}

/// Display-only projection of one model's prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelResult {
    pub model: ModelKind,
    pub label: Label,
    pub tone: Tone,
}

impl ModelResult {
    /// Descriptive subline shown under the label on the result card
    pub fn sublabel(&self) -> &'static str {
        match self.label {
            Label::Real => "Legitimate News",
            Label::Fake => "Potential Fake News",
        }
    }
}

/// Aggregate verdict across all models, carrying the vote tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consensus {
    /// More models predict Real than Fake
    LikelyLegitimate { real: usize, total: usize },
    /// More models predict Fake than Real
    LikelyFake { fake: usize, total: usize },
    /// Equal counts. Unreachable with the fixed 3 binary models, but the
    /// contract generalizes to N models.
    Uncertain,
}

impl Consensus {
    /// Headline shown in the consensus block
    pub fn headline(&self) -> &'static str {
        match self {
            Consensus::LikelyLegitimate { .. } => "Likely Legitimate",
            Consensus::LikelyFake { .. } => "Likely Fake News",
            Consensus::Uncertain => "Uncertain",
        }
    }

    /// Supporting subline with the vote tally
    pub fn subline(&self) -> String {
        match self {
            Consensus::LikelyLegitimate { real, total } => {
                format!("{real}/{total} models predict this is real news")
            }
            Consensus::LikelyFake { fake, total } => {
                format!("{fake}/{total} models predict this is fake news")
            }
            Consensus::Uncertain => {
                "Models are split - verify with additional sources".to_string()
            }
        }
    }
}
