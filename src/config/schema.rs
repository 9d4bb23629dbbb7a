//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! convention engine. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

use crate::case::CaseStyle;

/// Root configuration for one convention instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConventionConfig {
    /// Target casing style for routes, parameters, and bound names.
    pub style: CaseStyle,

    /// Rewrite route parameter names in addition to static segments.
    pub transform_parameters: bool,

    /// Never rewrite identifiers carrying a caller-declared bound name.
    pub preserve_explicit_names: bool,

    /// Identifiers exempted from rewriting regardless of style.
    #[serde(default)]
    pub exempt_names: Vec<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self {
            style: CaseStyle::Kebab,
            transform_parameters: true,
            preserve_explicit_names: true,
            exempt_names: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
