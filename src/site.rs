/// Settings of the site a request is served for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// The site's configured default culture
    pub site_culture: String,
}

impl SiteSettings {
    pub fn new(site_culture: impl Into<String>) -> Self {
        Self {
            site_culture: site_culture.into(),
        }
    }
}
