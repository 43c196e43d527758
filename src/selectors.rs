//! Bundled selectors over `RequestContext`.
//!
//! Default priorities, highest first: query parameter (10), cookie (0),
//! `Accept-Language` (-3), site default (-5). A selector whose source is
//! missing returns `None`. A source that is present but empty or malformed
//! yields a result with no name.

use crate::culture::is_valid_culture;
use crate::request::RequestContext;
use crate::selector::{CultureSelector, CultureSelectorResult};
use crate::site::SiteSettings;

pub const DEFAULT_CULTURE_KEY: &str = "culture";

pub const QUERY_PRIORITY: i32 = 10;
pub const COOKIE_PRIORITY: i32 = 0;
pub const ACCEPT_LANGUAGE_PRIORITY: i32 = -3;
pub const SITE_PRIORITY: i32 = -5;

fn proposal(value: &str, priority: i32) -> CultureSelectorResult {
    let value = value.trim();
    if is_valid_culture(value) {
        CultureSelectorResult::new(value, priority)
    } else {
        CultureSelectorResult::unnamed(priority)
    }
}

/// Proposes the site's default culture at the lowest priority.
#[derive(Debug, Clone)]
pub struct SiteCultureSelector {
    site: SiteSettings,
    priority: i32,
}

impl SiteCultureSelector {
    pub fn new(site: SiteSettings) -> Self {
        Self {
            site,
            priority: SITE_PRIORITY,
        }
    }
}

impl CultureSelector<RequestContext> for SiteCultureSelector {
    fn culture(&self, _request: &RequestContext) -> Option<CultureSelectorResult> {
        Some(proposal(&self.site.site_culture, self.priority))
    }
}

/// Reads the culture from a cookie.
#[derive(Debug, Clone)]
pub struct CookieCultureSelector {
    cookie_name: String,
    priority: i32,
}

impl CookieCultureSelector {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            priority: COOKIE_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for CookieCultureSelector {
    fn default() -> Self {
        Self::new(DEFAULT_CULTURE_KEY)
    }
}

impl CultureSelector<RequestContext> for CookieCultureSelector {
    fn culture(&self, request: &RequestContext) -> Option<CultureSelectorResult> {
        request
            .cookie(&self.cookie_name)
            .map(|value| proposal(value, self.priority))
    }
}

/// Reads the culture from a query string parameter.
#[derive(Debug, Clone)]
pub struct QueryCultureSelector {
    param: String,
    priority: i32,
}

impl QueryCultureSelector {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            priority: QUERY_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for QueryCultureSelector {
    fn default() -> Self {
        Self::new(DEFAULT_CULTURE_KEY)
    }
}

impl CultureSelector<RequestContext> for QueryCultureSelector {
    fn culture(&self, request: &RequestContext) -> Option<CultureSelectorResult> {
        request
            .query(&self.param)
            .map(|value| proposal(value, self.priority))
    }
}

/// Picks the most preferred language from the `Accept-Language` header.
#[derive(Debug, Clone)]
pub struct AcceptLanguageSelector {
    priority: i32,
}

impl AcceptLanguageSelector {
    pub fn new() -> Self {
        Self {
            priority: ACCEPT_LANGUAGE_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for AcceptLanguageSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CultureSelector<RequestContext> for AcceptLanguageSelector {
    fn culture(&self, request: &RequestContext) -> Option<CultureSelectorResult> {
        let header = request.header("Accept-Language")?;
        Some(match preferred_language(header) {
            Some(tag) => proposal(tag, self.priority),
            None => CultureSelectorResult::unnamed(self.priority),
        })
    }
}

/// Highest-weighted tag in an `Accept-Language` value.
///
/// Earlier entries win ties. A missing weight counts as 1. `*`, entries
/// with `q=0`, and entries whose weight is not a number in `0..=1` are
/// ignored.
pub fn preferred_language(header: &str) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let weight = match parts.find_map(|param| param.trim().strip_prefix("q=")) {
            None => 1.0,
            Some(q) => match q.trim().parse::<f32>() {
                Ok(weight) if (0.0..=1.0).contains(&weight) => weight,
                _ => continue,
            },
        };
        if weight <= 0.0 {
            continue;
        }

        if best.map_or(true, |(_, best_weight)| weight > best_weight) {
            best = Some((tag, weight));
        }
    }

    best.map(|(tag, _)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accept-Language Parsing Tests ====================

    #[test]
    fn test_preferred_language_single() {
        assert_eq!(preferred_language("fr-CH"), Some("fr-CH"));
    }

    #[test]
    fn test_preferred_language_by_weight() {
        assert_eq!(
            preferred_language("en;q=0.5, de;q=0.9, fr;q=0.7"),
            Some("de")
        );
    }

    #[test]
    fn test_preferred_language_implicit_weight_wins() {
        assert_eq!(preferred_language("en;q=0.8, fr-CH, fr;q=0.9"), Some("fr-CH"));
    }

    #[test]
    fn test_preferred_language_tie_keeps_order() {
        assert_eq!(preferred_language("nl, de"), Some("nl"));
    }

    #[test]
    fn test_preferred_language_skips_wildcard_and_zero() {
        assert_eq!(preferred_language("*, en;q=0, es;q=0.1"), Some("es"));
        assert_eq!(preferred_language("*"), None);
        assert_eq!(preferred_language(""), None);
    }

    #[test]
    fn test_preferred_language_ignores_invalid_weights() {
        assert_eq!(preferred_language("en;q=nan, fr"), Some("fr"));
        assert_eq!(preferred_language("en;q=0.9, fr;q=5"), Some("en"));
        assert_eq!(preferred_language("de;q=inf, it;q=-1, es;q=abc, pt;q=0.2"), Some("pt"));
        assert_eq!(preferred_language("en;q=NaN"), None);
    }

    // ==================== Selector Tests ====================

    #[test]
    fn test_site_selector_always_proposes() {
        let selector = SiteCultureSelector::new(SiteSettings::new("en-US"));
        let result = selector.culture(&RequestContext::new()).expect("Should propose");
        assert_eq!(result, CultureSelectorResult::new("en-US", SITE_PRIORITY));
    }

    #[test]
    fn test_cookie_selector() {
        let selector = CookieCultureSelector::default();
        let request = RequestContext::new().with_cookie("culture", "pt-BR");
        let result = selector.culture(&request).expect("Should propose");
        assert_eq!(result, CultureSelectorResult::new("pt-BR", COOKIE_PRIORITY));
    }

    #[test]
    fn test_cookie_selector_without_cookie() {
        let selector = CookieCultureSelector::new("lang");
        let request = RequestContext::new().with_cookie("culture", "pt-BR");
        assert!(selector.culture(&request).is_none());
    }

    #[test]
    fn test_cookie_selector_empty_value_is_unnamed() {
        let selector = CookieCultureSelector::default().with_priority(7);
        let request = RequestContext::new().with_cookie("culture", "");
        let result = selector.culture(&request).expect("Should participate");
        assert_eq!(result, CultureSelectorResult::unnamed(7));
    }

    #[test]
    fn test_query_selector_malformed_is_unnamed() {
        let selector = QueryCultureSelector::default();
        let request = RequestContext::new().with_query("culture", "x");
        let result = selector.culture(&request).expect("Should participate");
        assert_eq!(result.name(), None);
        assert_eq!(result.priority, QUERY_PRIORITY);
    }

    #[test]
    fn test_accept_language_selector() {
        let selector = AcceptLanguageSelector::new();
        let request = RequestContext::new().with_header("accept-language", "ja;q=0.4, ko");
        let result = selector.culture(&request).expect("Should propose");
        assert_eq!(result, CultureSelectorResult::new("ko", ACCEPT_LANGUAGE_PRIORITY));
    }

    #[test]
    fn test_accept_language_selector_missing_header() {
        let selector = AcceptLanguageSelector::new();
        assert!(selector.culture(&RequestContext::new()).is_none());
    }

    #[test]
    fn test_accept_language_selector_only_wildcard() {
        let selector = AcceptLanguageSelector::new();
        let request = RequestContext::new().with_header("Accept-Language", "*");
        let result = selector.culture(&request).expect("Should participate");
        assert_eq!(result.name(), None);
    }
}
