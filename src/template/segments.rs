//! Route segment transformation.
//!
//! # Responsibilities
//! - Rewrite static route segments in the configured case style
//! - Leave parameter groups and structural tokens untouched
//! - Pass traversal/rooted templates through entirely unmodified
//!
//! # Design Decisions
//! - Templates containing `..`, `~`, or `\` are returned verbatim: they
//!   address the filesystem or the application root, not route text
//! - Segments starting with `{` (parameter group) or `[` (token resolved
//!   later by the host) are skipped, not parsed
//! - Segment count and order are always preserved

use crate::case::CaseConverter;

/// Rewrite the static segments of a route template.
///
/// Splits on `/` (preserving a leading slash), converts every segment
/// that is not a parameter group or structural token, and rejoins.
/// Empty or whitespace templates come back unchanged.
pub fn transform_template(template: &str, converter: &dyn CaseConverter) -> String {
    if template.trim().is_empty() {
        return template.to_string();
    }

    // Traversal and rooted-path markers make the whole template off limits.
    if template.contains("..") || template.contains('~') || template.contains('\\') {
        tracing::debug!(template, "template contains path markers, skipping");
        return template.to_string();
    }

    let rooted = template.starts_with('/');
    let body = if rooted { &template[1..] } else { template };

    let transformed: Vec<String> = body
        .split('/')
        .map(|segment| {
            if segment.starts_with('{') || segment.starts_with('[') {
                segment.to_string()
            } else {
                converter.convert(segment)
            }
        })
        .collect();

    let joined = transformed.join("/");
    if rooted {
        format!("/{}", joined)
    } else {
        joined
    }
}
