//! Configuration management subsystem.
//!
//! # Responsibilities
//! - Define the convention configuration schema
//! - Load and parse TOML config files
//! - Validate semantics before a config is accepted
//!
//! # Design Decisions
//! - A configuration is immutable for its lifetime; isolated instances
//!   (e.g. for tests) get their own `ConventionConfig`
//! - Validation collects every error instead of stopping at the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ConventionConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
