//! Metrics collection.
//!
//! # Metrics
//! - `convention_types_registered_total` (counter): complex types registered
//! - `convention_eligibility_decisions_total` (counter): decision lookups,
//!   labelled by cache outcome
//! - `convention_templates_transformed_total` (counter): template rewrites,
//!   labelled by pass kind
//!
//! # Design Decisions
//! - Thin wrappers over the `metrics` facade; the host picks the exporter
//! - Counter updates only, nothing on the per-lookup hot path beyond an
//!   atomic increment

/// Record a first-time complex-type registration.
pub fn record_type_registered() {
    metrics::counter!("convention_types_registered_total").increment(1);
}

/// Record an eligibility lookup, noting whether the cache already held it.
pub fn record_eligibility_decision(cache_hit: bool) {
    let outcome = if cache_hit { "hit" } else { "miss" };
    metrics::counter!("convention_eligibility_decisions_total", "cache" => outcome).increment(1);
}

/// Record a template transformation pass (`"segments"` or `"parameters"`).
pub fn record_template_transformed(kind: &'static str) {
    metrics::counter!("convention_templates_transformed_total", "pass" => kind).increment(1);
}
