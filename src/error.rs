//! Unified inspector error type used across all phases.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Select,
    Render,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Select => write!(f, "Select"),
            Phase::Render => write!(f, "Render"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("[{phase}:{code}] {message}{}", entity_suffix(.entity_id))]
pub struct InspectError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub entity_id: Option<String>,
}

fn entity_suffix(entity_id: &Option<String>) -> String {
    match entity_id {
        Some(id) => format!(" (entity '{}')", id),
        None => String::new(),
    }
}

impl InspectError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        InspectError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            entity_id: None,
        }
    }

    pub fn select(code: &str, message: impl Into<String>, entity_id: Option<String>) -> Self {
        InspectError {
            code: code.into(),
            phase: Phase::Select,
            message: message.into(),
            entity_id,
        }
    }

    pub fn render(code: &str, message: impl Into<String>, entity_id: Option<String>) -> Self {
        InspectError {
            code: code.into(),
            phase: Phase::Render,
            message: message.into(),
            entity_id,
        }
    }
}
