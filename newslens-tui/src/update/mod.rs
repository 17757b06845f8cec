//! Update layer: state transitions
//!
//! Consumes messages and mutates the model. This is the only place the
//! model changes, which keeps the submission state machine exhaustively
//! testable.

use newslens_core::validate;

use crate::message::AppMessage;
use crate::model::{AnalysisState, App};

/// Handle an application message
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            if let Some(handle) = app.inflight.take() {
                handle.abort();
            }
            app.should_quit = true;
        }

        AppMessage::Input(ch) => {
            // The text area is disabled while a request is in flight
            if !app.analysis.is_loading() {
                app.input.push(ch);
                on_input_edited(app);
            }
        }

        AppMessage::Paste(text) => {
            if !app.analysis.is_loading() {
                app.input.push_str(&text);
                on_input_edited(app);
            }
        }

        AppMessage::Backspace => {
            if !app.analysis.is_loading() {
                app.input.pop();
                on_input_edited(app);
            }
        }

        AppMessage::Submit => submit(app),

        AppMessage::Clear => clear(app),

        AppMessage::AnalysisCompleted { generation, result } => {
            on_analysis_completed(app, generation, result);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// Editing the text invalidates previous errors and results
fn on_input_edited(app: &mut App) {
    app.validation_errors.clear();
    if !matches!(app.analysis, AnalysisState::Idle) {
        app.analysis = AnalysisState::Idle;
    }
}

/// Validate and dispatch a submission
fn submit(app: &mut App) {
    // At most one request in flight
    if app.analysis.is_loading() {
        return;
    }

    let errors = validate(&app.input);
    app.validation_errors = errors;
    if !app.validation_errors.is_empty() {
        return;
    }

    app.generation += 1;
    app.analysis = AnalysisState::Loading;
    app.set_status("Analyzing...");

    let handle = app
        .backend
        .spawn_analysis(app.generation, app.input.clone());
    app.inflight = Some(handle);
}

/// Reset the form; cancels an in-flight request
fn clear(app: &mut App) {
    if let Some(handle) = app.inflight.take() {
        handle.abort();
        log::debug!("Cancelled in-flight analysis (generation {})", app.generation);
    }
    // Bump so a completion that already left the task is discarded
    app.generation += 1;

    app.input.clear();
    app.validation_errors.clear();
    app.analysis = AnalysisState::Idle;
    app.clear_status();
}

/// Apply an analysis completion, discarding stale ones
fn on_analysis_completed(
    app: &mut App,
    generation: u64,
    result: newslens_core::CoreResult<newslens_core::PredictionResponse>,
) {
    if generation != app.generation {
        log::debug!("Discarding stale completion (generation {generation})");
        return;
    }

    app.inflight = None;

    match result {
        Ok(response) => {
            app.analysis = AnalysisState::Success(response);
            app.set_status("Analysis complete");
        }
        Err(err) => {
            if err.is_expected() {
                log::warn!("Analysis failed: {err}");
            } else {
                log::error!("Analysis failed: {err}");
            }
            app.analysis = AnalysisState::Failure(err.to_string());
            app.clear_status();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use newslens_core::{CoreError, Label, PredictionResponse, PredictorConfig};

    use super::*;
    use crate::backend::AnalysisService;

    /// App wired to a dead local port so no test touches the network
    fn test_app() -> App {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = PredictorConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            reveal_delay: Duration::ZERO,
        };
        let backend =
            AnalysisService::new(tokio::runtime::Handle::current(), &config, tx).unwrap();
        App::new(backend, rx)
    }

    fn sample_response() -> PredictionResponse {
        PredictionResponse {
            logistic_regression: Label::Real,
            random_forest: Label::Real,
            xgboost: Label::Fake,
        }
    }

    #[tokio::test]
    async fn test_submit_blocked_on_short_input() {
        let mut app = test_app();
        app.input = "short".to_string();

        update(&mut app, AppMessage::Submit);

        assert_eq!(app.analysis, AnalysisState::Idle);
        assert!(app.inflight.is_none());
        assert_eq!(app.validation_errors.len(), 1);
        assert_eq!(
            app.validation_errors[0].message,
            "News text must be at least 10 characters long"
        );
    }

    #[tokio::test]
    async fn test_submit_blocked_on_over_limit_input() {
        let mut app = test_app();
        app.input = "a".repeat(5001);

        update(&mut app, AppMessage::Submit);

        assert_eq!(app.analysis, AnalysisState::Idle);
        assert_eq!(
            app.validation_errors[0].message,
            "News text must be less than 5000 characters"
        );
    }

    #[tokio::test]
    async fn test_valid_submit_enters_loading() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();

        update(&mut app, AppMessage::Submit);

        assert!(app.analysis.is_loading());
        assert!(app.validation_errors.is_empty());
        assert!(app.inflight.is_some());
        assert_eq!(app.generation, 1);
    }

    #[tokio::test]
    async fn test_submit_ignored_while_loading() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();

        update(&mut app, AppMessage::Submit);
        update(&mut app, AppMessage::Submit);

        // The second submit must not dispatch a new request
        assert_eq!(app.generation, 1);
    }

    #[tokio::test]
    async fn test_completion_success() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        update(&mut app, AppMessage::Submit);

        let generation = app.generation;
        update(
            &mut app,
            AppMessage::AnalysisCompleted {
                generation,
                result: Ok(sample_response()),
            },
        );

        assert_eq!(app.analysis, AnalysisState::Success(sample_response()));
        assert!(app.inflight.is_none());
    }

    #[tokio::test]
    async fn test_completion_transport_failure() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        update(&mut app, AppMessage::Submit);

        let generation = app.generation;
        update(
            &mut app,
            AppMessage::AnalysisCompleted {
                generation,
                result: Err(CoreError::Transport(500)),
            },
        );

        assert_eq!(
            app.analysis,
            AnalysisState::Failure("HTTP error! status: 500".to_string())
        );
    }

    #[tokio::test]
    async fn test_stale_completion_discarded() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        update(&mut app, AppMessage::Submit);
        let stale = app.generation;

        // User clears while the request is in flight
        update(&mut app, AppMessage::Clear);
        assert_eq!(app.analysis, AnalysisState::Idle);
        assert!(app.inflight.is_none());

        // The aborted task's completion arrives late and must be dropped
        update(
            &mut app,
            AppMessage::AnalysisCompleted {
                generation: stale,
                result: Ok(sample_response()),
            },
        );
        assert_eq!(app.analysis, AnalysisState::Idle);
    }

    #[tokio::test]
    async fn test_editing_clears_previous_result() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        update(&mut app, AppMessage::Submit);
        let generation = app.generation;
        update(
            &mut app,
            AppMessage::AnalysisCompleted {
                generation,
                result: Ok(sample_response()),
            },
        );

        update(&mut app, AppMessage::Input('!'));

        assert_eq!(app.analysis, AnalysisState::Idle);
        assert!(app.input.ends_with('!'));
    }

    #[tokio::test]
    async fn test_input_ignored_while_loading() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        let before = app.input.clone();
        update(&mut app, AppMessage::Submit);

        update(&mut app, AppMessage::Input('x'));
        update(&mut app, AppMessage::Backspace);

        assert_eq!(app.input, before);
    }

    #[tokio::test]
    async fn test_clear_after_success_resets_everything() {
        let mut app = test_app();
        app.input = "a perfectly valid piece of news text".to_string();
        update(&mut app, AppMessage::Submit);
        let generation = app.generation;
        update(
            &mut app,
            AppMessage::AnalysisCompleted {
                generation,
                result: Ok(sample_response()),
            },
        );

        update(&mut app, AppMessage::Clear);

        assert!(app.input.is_empty());
        assert!(app.validation_errors.is_empty());
        assert_eq!(app.analysis, AnalysisState::Idle);
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_validation_errors_cleared_on_edit() {
        let mut app = test_app();
        app.input = "short".to_string();
        update(&mut app, AppMessage::Submit);
        assert!(!app.validation_errors.is_empty());

        update(&mut app, AppMessage::Input('x'));
        assert!(app.validation_errors.is_empty());
    }

    #[tokio::test]
    async fn test_paste_appends() {
        let mut app = test_app();
        update(&mut app, AppMessage::Paste("pasted article".to_string()));
        assert_eq!(app.input, "pasted article");
    }
}
