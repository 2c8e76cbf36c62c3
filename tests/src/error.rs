//! Scenario errors.

use thiserror::Error;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] step '{step}' failed: {message}")]
    StepFailed {
        scenario: String,
        step: String,
        message: String,
    },

    #[error("[{scenario}] assertion failed in step '{step}': {message}")]
    AssertionFailed {
        scenario: String,
        step: String,
        message: String,
    },

    #[error("[{scenario}] freeze failed: {message}")]
    FreezeFailed { scenario: String, message: String },

    #[error("invalid error pattern '{pattern}': {reason}")]
    InvalidErrorPattern { pattern: String, reason: String },
}

impl ScenarioError {
    pub fn step_failed(
        scenario: impl Into<String>,
        step: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::StepFailed {
            scenario: scenario.into(),
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(
        scenario: impl Into<String>,
        step: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn freeze_failed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FreezeFailed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
