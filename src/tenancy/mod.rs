//! Tenant URL resolution subsystem.
//!
//! # Data Flow
//! ```text
//! GET <root>/assets/appconfig.json
//!     → AppConfig (URL templates + locale mappings)
//!     → finder.rs (tenancy name from the current URL)
//!     → urls.rs (placeholder replaced, or removed with its separator)
//!     → TenantResolution
//! ```

pub mod finder;
pub mod resolver;
pub mod types;
pub mod urls;

pub use finder::{SubdomainTenancyNameFinder, TenancyNameFinder};
pub use resolver::TenantUrlResolver;
pub use types::{AppConfig, LocaleMapping, LocaleMappings, ResolvedUrls, TenantContext, TenantResolution};
pub use urls::{apply_tenancy, resolve_urls};
