//! Culture registry and request culture resolution.
//!
//! # Architecture
//!
//! - `registry`: add/list/delete/lookup of known culture identifiers, backed by a `CultureStore`
//! - `resolver`: ranks the answers of pluggable `CultureSelector`s and picks a winner
//! - `selectors`: bundled selectors over a transport-neutral `RequestContext`
//! - `store`: SQLite and in-memory implementations of the persistent store
//!
//! # Example
//!
//! ```rust,ignore
//! use site_culture::{CultureRegistry, CultureResolver, MemoryStore, SiteSettings};
//!
//! let registry = CultureRegistry::new(MemoryStore::new());
//! registry.add_culture("en-US")?;
//!
//! let resolver = CultureResolver::new().with_site(SiteSettings::new("en-US"));
//! let culture = resolver.current_culture(&request);
//! ```

pub mod config;
pub mod culture;
pub mod error;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod selector;
pub mod selectors;
pub mod site;
pub mod store;

pub use culture::{is_valid_culture, CultureRecord};
pub use error::{CultureError, StoreError};
pub use registry::CultureRegistry;
pub use request::RequestContext;
pub use resolver::CultureResolver;
pub use selector::{CultureSelector, CultureSelectorResult};
pub use site::SiteSettings;
pub use store::{CultureStore, MemoryStore, SqliteStore};
