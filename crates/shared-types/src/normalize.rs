//! # Phone Number Normalization
//!
//! Reduces raw call-handle text to the canonical comparison key used by the
//! registry and the screening engine. Every lookup and every import goes
//! through this function, so both sides of a comparison always agree on form.

/// Normalize a raw handle into a canonical phone-number key.
///
/// Keeps ASCII digits and a single leading `+`; strips everything else
/// (spaces, dashes, parentheses, letters). Returns `None` when nothing
/// identifiable remains. That is a distinct "no number available" outcome,
/// not an error, and callers on the decision path must treat it as
/// default-allow.
///
/// Idempotent: normalizing an already-canonical string returns it unchanged.
pub fn normalize_number(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.trim().char_indices() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && i == 0 {
            out.push(c);
        }
    }
    // A bare "+" carries no digits and identifies nothing.
    if out.is_empty() || out == "+" {
        None
    } else {
        Some(out)
    }
}
