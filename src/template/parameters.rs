//! Route parameter-name transformation.
//!
//! # Responsibilities
//! - Locate every `{...}` parameter group in a template
//! - Rewrite the bare parameter name in the configured case style
//! - Preserve wildcard markers, constraints, defaults, and `?` verbatim
//!
//! # Design Decisions
//! - Balanced-brace matching, not first-`}` splitting: a constraint body
//!   may itself contain braces (`{code:regex(^\d{3}$)}`)
//! - Unbalanced braces are the host's fault; the template is returned
//!   unmodified instead of raising
//! - The structural markers (`*`, `:`, `=`, `?`) are never case candidates

use crate::case::CaseConverter;

/// Callback deciding whether a specific parameter name may be rewritten.
pub type TransformPredicate<'a> = dyn Fn(&str) -> bool + 'a;

/// Rewrite the parameter names in a route template.
///
/// Each brace-delimited group is decomposed into wildcard prefix, bare
/// name, constraint/default tail, and optional marker; only the bare name
/// is converted, and only when `should_transform` (default: always)
/// allows it. A template with unbalanced braces comes back unchanged.
pub fn transform_parameters(
    template: &str,
    converter: &dyn CaseConverter,
    should_transform: Option<&TransformPredicate>,
) -> String {
    if template.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(template.len());
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let Some(close) = find_balanced_close(bytes, i) else {
                    tracing::warn!(template, "unbalanced '{{' in route template");
                    return template.to_string();
                };
                let body = &template[i + 1..close];
                out.push('{');
                out.push_str(&rewrite_group(body, converter, should_transform));
                out.push('}');
                i = close + 1;
            }
            b'}' => {
                tracing::warn!(template, "unbalanced '}}' in route template");
                return template.to_string();
            }
            _ => {
                // Copy the full UTF-8 character, not just the lead byte.
                let ch_len = template[i..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                out.push_str(&template[i..i + ch_len]);
                i += ch_len;
            }
        }
    }

    out
}

/// Find the index of the `}` closing the `{` at `open`, counting depth.
fn find_balanced_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, b) in bytes[open..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Rewrite a single group body, preserving every structural marker.
fn rewrite_group(
    body: &str,
    converter: &dyn CaseConverter,
    should_transform: Option<&TransformPredicate>,
) -> String {
    let (wildcard, rest) = split_wildcard(body);

    let (core, optional) = match rest.strip_suffix('?') {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };

    // The bare name runs to the first ':' (constraint) or '=' (default);
    // everything from that point on is carried verbatim.
    let tail_start = core.find([':', '=']).unwrap_or(core.len());
    let (name, tail) = core.split_at(tail_start);

    let rewritten = if name.is_empty() {
        String::new()
    } else if should_transform.map(|p| p(name)).unwrap_or(true) {
        converter.convert(name)
    } else {
        name.to_string()
    };

    let mut out = String::with_capacity(body.len() + rewritten.len());
    out.push_str(wildcard);
    out.push_str(&rewritten);
    out.push_str(tail);
    if optional {
        out.push('?');
    }
    out
}

/// Split off the leading `*` catch-all marker(s).
fn split_wildcard(body: &str) -> (&str, &str) {
    let end = body.len() - body.trim_start_matches('*').len();
    body.split_at(end)
}
