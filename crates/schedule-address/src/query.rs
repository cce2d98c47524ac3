//! Query classification: full UK postcode or free-text place search.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupKind {
    /// Normalised `OUTWARD INWARD`, e.g. `"SW1A 1AA"`.
    Postcode(String),
    /// Trimmed free text.
    Place(String),
}

impl LookupKind {
    pub fn query(&self) -> &str {
        match self {
            Self::Postcode(q) | Self::Place(q) => q,
        }
    }
}

const POSTCODE_PATTERN: &str = r"^([A-Z]{1,2}[0-9][A-Z0-9]?)\s*([0-9][A-Z]{2})$";

/// Compiled once. `None` only if `POSTCODE_PATTERN` itself is malformed.
fn postcode_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(POSTCODE_PATTERN).ok()).as_ref()
}

/// `Some("OUTWARD INWARD")` if `input` is a complete UK postcode in any
/// case and spacing.
pub fn normalise_postcode(input: &str) -> Option<String> {
    let upper = input.trim().to_uppercase();
    let caps = postcode_pattern()?.captures(&upper)?;
    Some(format!("{} {}", &caps[1], &caps[2]))
}

/// Decide what lookup `input` needs. `None` when it is too short to search.
pub fn classify(input: &str, min_query_len: usize) -> Option<LookupKind> {
    let trimmed = input.trim();
    if let Some(postcode) = normalise_postcode(trimmed) {
        return Some(LookupKind::Postcode(postcode));
    }
    if trimmed.chars().count() < min_query_len {
        return None;
    }
    Some(LookupKind::Place(trimmed.to_string()))
}
