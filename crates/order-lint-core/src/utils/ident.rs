//! Identifier normalization for comparison keys.
//!
//! Kotlin identifiers may be backtick-escaped (`` `fun` ``, `` `has space` ``)
//! and member references may be qualified (`Fruit.Entry`). These helpers are
//! total: text without delimiters passes through unchanged.

/// Strips one layer of backtick escaping, if present.
#[must_use]
pub fn strip_backticks(raw: &str) -> &str {
    raw.strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .unwrap_or(raw)
}

/// Returns the trailing member name of a dotted reference.
///
/// Dots inside backticks do not split segments, so `` Outer.`a.b` ``
/// yields `` `a.b` ``.
#[must_use]
pub fn member_name(expr: &str) -> &str {
    let mut last_dot = None;
    let mut in_backticks = false;
    for (i, ch) in expr.char_indices() {
        match ch {
            '`' => in_backticks = !in_backticks,
            '.' if !in_backticks => last_dot = Some(i),
            _ => {}
        }
    }
    match last_dot {
        Some(i) => &expr[i + 1..],
        None => expr,
    }
}

/// Canonical comparable text: trailing member name with backticks stripped.
#[must_use]
pub fn comparable_name(raw: &str) -> &str {
    strip_backticks(member_name(raw))
}
