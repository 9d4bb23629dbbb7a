//! Observability subsystem.
//!
//! Logging and metrics for the convention engine. Both are facades: the
//! host decides where log lines and counter values end up.

pub mod logging;
pub mod metrics;
