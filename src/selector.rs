//! Culture selector strategies.

/// A culture proposed by a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureSelectorResult {
    /// Proposed culture. `None` or empty means the selector participates in
    /// ranking but does not name a culture.
    pub culture_name: Option<String>,

    /// Higher values take precedence
    pub priority: i32,
}

impl CultureSelectorResult {
    pub fn new(culture_name: impl Into<String>, priority: i32) -> Self {
        Self {
            culture_name: Some(culture_name.into()),
            priority,
        }
    }

    /// A result that ranks but names no culture.
    pub fn unnamed(priority: i32) -> Self {
        Self {
            culture_name: None,
            priority,
        }
    }

    /// The proposed name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.culture_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Inspects a request and optionally proposes a culture.
///
/// Returning `None` means the selector has no opinion at all and is left
/// out of ranking entirely. Selectors must not rely on being called in any
/// particular order relative to each other.
pub trait CultureSelector<C: ?Sized> {
    fn culture(&self, request: &C) -> Option<CultureSelectorResult>;
}

impl<C, F> CultureSelector<C> for F
where
    C: ?Sized,
    F: Fn(&C) -> Option<CultureSelectorResult>,
{
    fn culture(&self, request: &C) -> Option<CultureSelectorResult> {
        self(request)
    }
}
