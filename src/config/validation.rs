//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (log level known, exempt names well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConventionConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ConventionConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown log level '{0}' (expected trace, debug, info, warn, or error)")]
    UnknownLogLevel(String),

    #[error("exempt name at index {0} is empty")]
    EmptyExemptName(usize),

    #[error("exempt name '{0}' contains whitespace")]
    WhitespaceInExemptName(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ConventionConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    for (index, name) in config.exempt_names.iter().enumerate() {
        if name.is_empty() {
            errors.push(ValidationError::EmptyExemptName(index));
        } else if name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::WhitespaceInExemptName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
