//! Request culture resolution.
//!
//! Every registered selector is asked for a proposal. Selectors without an
//! opinion are dropped, the rest are ranked by descending priority, and the
//! first proposal that actually names a culture wins. Ties keep
//! registration order.

use tracing::debug;

use crate::selector::{CultureSelector, CultureSelectorResult};
use crate::site::SiteSettings;

type BoxedSelector<C> = Box<dyn CultureSelector<C> + Send + Sync>;

pub struct CultureResolver<C: ?Sized> {
    selectors: Vec<BoxedSelector<C>>,
    site: Option<SiteSettings>,
}

impl<C: ?Sized> Default for CultureResolver<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> CultureResolver<C> {
    /// Resolver with no selectors and no site
    pub fn new() -> Self {
        Self {
            selectors: Vec::new(),
            site: None,
        }
    }

    /// Append a selector. Registration order breaks priority ties.
    pub fn with_selector<S>(mut self, selector: S) -> Self
    where
        S: CultureSelector<C> + Send + Sync + 'static,
    {
        self.register(selector);
        self
    }

    pub fn register<S>(&mut self, selector: S)
    where
        S: CultureSelector<C> + Send + Sync + 'static,
    {
        self.selectors.push(Box::new(selector));
    }

    /// Attach the site whose default culture `site_culture` reports.
    pub fn with_site(mut self, site: SiteSettings) -> Self {
        self.site = Some(site);
        self
    }

    pub fn selector_count(&self) -> usize {
        self.selectors.len()
    }

    /// Resolve the culture for `request`.
    ///
    /// Returns an empty string when no selector names a culture. That is a
    /// normal outcome: callers apply their own fallback, usually
    /// `site_culture`.
    pub fn current_culture(&self, request: &C) -> String {
        let mut proposals: Vec<CultureSelectorResult> = self
            .selectors
            .iter()
            .filter_map(|selector| selector.culture(request))
            .collect();

        if proposals.is_empty() {
            debug!("No selector proposed a culture");
            return String::new();
        }

        // Stable sort: equal priorities keep registration order
        proposals.sort_by(|a, b| b.priority.cmp(&a.priority));
        debug!("Ranked culture proposals: {:?}", proposals);

        proposals
            .iter()
            .find_map(|proposal| proposal.name())
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// The attached site's default culture, or `None` without a site.
    pub fn site_culture(&self) -> Option<&str> {
        self.site.as_ref().map(|site| site.site_culture.as_str())
    }

    /// `current_culture`, falling back to the site culture.
    pub fn resolve_or_default(&self, request: &C) -> Option<String> {
        let culture = self.current_culture(request);
        if !culture.is_empty() {
            return Some(culture);
        }
        self.site_culture().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Helper Functions ====================

    fn fixed(name: &'static str, priority: i32) -> impl Fn(&()) -> Option<CultureSelectorResult> {
        move |_: &()| Some(CultureSelectorResult::new(name, priority))
    }

    fn silent(_: &()) -> Option<CultureSelectorResult> {
        None
    }

    // ==================== Ranking Tests ====================

    #[test]
    fn test_no_selectors() {
        let resolver: CultureResolver<()> = CultureResolver::new();
        assert_eq!(resolver.current_culture(&()), "");
    }

    #[test]
    fn test_highest_priority_wins() {
        let resolver = CultureResolver::new()
            .with_selector(fixed("en", 1))
            .with_selector(fixed("fr", 10))
            .with_selector(fixed("de", 5));
        assert_eq!(resolver.current_culture(&()), "fr");
    }

    #[test]
    fn test_tie_keeps_registration_order() {
        let resolver = CultureResolver::new()
            .with_selector(fixed("fr", 5))
            .with_selector(fixed("en", 5));
        assert_eq!(resolver.current_culture(&()), "fr");

        let reversed = CultureResolver::new()
            .with_selector(fixed("en", 5))
            .with_selector(fixed("fr", 5));
        assert_eq!(reversed.current_culture(&()), "en");
    }

    #[test]
    fn test_negative_priorities() {
        let resolver = CultureResolver::new()
            .with_selector(fixed("site", -5))
            .with_selector(fixed("browser", -3));
        assert_eq!(resolver.current_culture(&()), "browser");
    }

    // ==================== Abstention Tests ====================

    #[test]
    fn test_all_selectors_silent() {
        let resolver = CultureResolver::new()
            .with_selector(silent)
            .with_selector(silent);
        assert_eq!(resolver.current_culture(&()), "");
    }

    #[test]
    fn test_silent_selector_is_skipped() {
        let resolver = CultureResolver::new()
            .with_selector(silent)
            .with_selector(fixed("es", 0));
        assert_eq!(resolver.current_culture(&()), "es");
    }

    #[test]
    fn test_empty_name_alone_resolves_empty() {
        let resolver = CultureResolver::new().with_selector(fixed("", 10));
        assert_eq!(resolver.current_culture(&()), "");
    }

    #[test]
    fn test_unnamed_higher_priority_falls_through() {
        let resolver = CultureResolver::new()
            .with_selector(|_: &()| Some(CultureSelectorResult::unnamed(100)))
            .with_selector(fixed("", 50))
            .with_selector(fixed("it", 1));
        assert_eq!(resolver.current_culture(&()), "it");
    }

    #[test]
    fn test_all_unnamed_resolves_empty() {
        let resolver = CultureResolver::new()
            .with_selector(|_: &()| Some(CultureSelectorResult::unnamed(3)))
            .with_selector(fixed("", 2));
        assert_eq!(resolver.current_culture(&()), "");
    }

    // ==================== Request Context Tests ====================

    #[test]
    fn test_selectors_see_request() {
        let resolver: CultureResolver<str> = CultureResolver::new()
            .with_selector(|request: &str| {
                request
                    .strip_prefix("/")
                    .and_then(|path| path.split('/').next())
                    .filter(|segment| segment.len() == 2)
                    .map(|segment| CultureSelectorResult::new(segment, 1))
            });
        assert_eq!(resolver.current_culture("/nl/about"), "nl");
        assert_eq!(resolver.current_culture("/about"), "");
    }

    // ==================== Site Culture Tests ====================

    #[test]
    fn test_site_culture_without_site() {
        let resolver: CultureResolver<()> = CultureResolver::new();
        assert_eq!(resolver.site_culture(), None);
    }

    #[test]
    fn test_site_culture_passthrough() {
        let resolver: CultureResolver<()> =
            CultureResolver::new().with_site(SiteSettings::new("en-GB"));
        assert_eq!(resolver.site_culture(), Some("en-GB"));
    }

    #[test]
    fn test_site_culture_independent_of_selectors() {
        let resolver = CultureResolver::new()
            .with_selector(fixed("fr", 1))
            .with_site(SiteSettings::new("en-GB"));
        assert_eq!(resolver.site_culture(), Some("en-GB"));
        assert_eq!(resolver.current_culture(&()), "fr");
    }

    #[test]
    fn test_resolve_or_default() {
        let resolver = CultureResolver::new()
            .with_selector(fixed("", 10))
            .with_site(SiteSettings::new("en-GB"));
        assert_eq!(resolver.current_culture(&()), "");
        assert_eq!(resolver.resolve_or_default(&()), Some("en-GB".to_string()));

        let bare = CultureResolver::new().with_selector(silent);
        assert_eq!(bare.resolve_or_default(&()), None);
    }

    #[test]
    fn test_register_counts_selectors() {
        let mut resolver = CultureResolver::new();
        resolver.register(fixed("en", 1));
        resolver.register(silent);
        assert_eq!(resolver.selector_count(), 2);
    }
}
