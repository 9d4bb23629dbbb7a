//! Route & Identifier Case-Convention Engine
//!
//! A convention layer that renames routes, route parameters, and bound
//! model identifiers into a configured casing style (kebab, snake, camel,
//! pascal, or custom) on behalf of a web request-handling framework.
//!
//! # Architecture Overview
//!
//! ```text
//!    Raw template / identifier          Host metadata passes
//!              │                                │
//!              ▼                                ▼
//!      ┌──────────────┐                 ┌──────────────┐
//!      │   template   │                 │   registry   │
//!      │ segments +   │                 │ complex types│
//!      │ parameters   │◀───eligible?────│ + eligibility│
//!      └──────┬───────┘                 └──────┬───────┘
//!             │                                │
//!             ▼                                │
//!      ┌──────────────┐                        │
//!      │     case     │      ┌─────────────────┘
//!      │ tokenizer +  │      ▼
//!      │  converters  │   cached decision (first writer wins)
//!      └──────────────┘
//!
//!      Cross-cutting: config (TOML schema + validation),
//!      observability (tracing + metrics counters)
//! ```
//!
//! The engine performs no HTTP I/O and owns no reflection: the host
//! supplies raw templates, identifiers, and type shapes, and receives
//! rewritten strings plus per-identifier transform decisions. All state
//! lives in a [`CaseConvention`] constructed once per configuration.

// Core subsystems
pub mod case;
pub mod registry;
pub mod template;

// Wiring
pub mod convention;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use case::{CaseConverter, CaseStyle};
pub use config::ConventionConfig;
pub use convention::CaseConvention;
pub use registry::{BindingSource, MetadataEvent, TypeId, TypeIntrospector};
