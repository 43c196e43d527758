//! Culture records and culture name validation.
//!
//! Accepted shapes, loosely following IETF language tags:
//! - `<languagecode2>` (e.g. "en")
//! - `<languagecode2>-<country/regioncode2>` (e.g. "en-US")
//! - `<languagecode2>-<scripttag>-<country/regioncode2>` (e.g. "en-Latn-US")

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A stored culture identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CultureRecord {
    /// Surrogate key assigned by the store
    pub id: i64,

    /// Culture identifier (e.g. "en-US")
    pub culture_name: String,
}

static CULTURE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Check whether `culture_name` contains a well-formed culture identifier.
///
/// The pattern is searched, not anchored: "1 en-US!" is accepted because it
/// contains "en-US". Callers wanting whole-string validation must trim and
/// compare themselves.
pub fn is_valid_culture(culture_name: &str) -> bool {
    let regex = CULTURE_REGEX
        .get_or_init(|| Regex::new(r"\w{2}(-\w{2,})*").expect("culture pattern is valid"));

    regex.is_match(culture_name)
}
