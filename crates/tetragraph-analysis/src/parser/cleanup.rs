//! Node-name cleanup.
//!
//! Export tools decorate node names with enumeration prefixes
//! (`1. Smoking`), trailing punctuation (`Smoking;`), and quoting
//! (`"Lung Cancer"`). Cleanup strips one decoration layer at a time
//! and repeats to a fixpoint, so the result is idempotent even when
//! decorations nest (`'A;'` → `A;` → `A`).

/// Clean a raw endpoint into a node identifier.
///
/// An empty result is legal; the empty string is just another node
/// identifier downstream.
pub fn clean_node_name(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = cleanup_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// One cleanup pass: trim, drop an enumeration prefix, drop trailing
/// semicolons/commas, drop one layer of surrounding quotes.
fn cleanup_pass(raw: &str) -> String {
    let mut s = raw.trim();
    s = strip_enumeration_prefix(s);
    s = s.trim_end_matches(|c: char| c == ';' || c == ',' || c.is_whitespace());
    s = strip_quote_layer(s);
    s.trim().to_string()
}

/// Strip a leading `<digits><'.'|')'><whitespace>` enumeration prefix.
fn strip_enumeration_prefix(s: &str) -> &str {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return s;
    }
    let rest = &s[digits_end..];
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('.') | Some(')'), Some(ws)) if ws.is_whitespace() => chars.as_str(),
        _ => s,
    }
}

/// Strip a single layer of matching surrounding single or double quotes.
fn strip_quote_layer(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), s.chars().last()) {
        (Some(q @ ('"' | '\'')), Some(last)) if last == q && s.len() >= 2 => {
            &s[1..s.len() - 1]
        }
        _ => s,
    }
}
