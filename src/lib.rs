//! Tenant-aware configuration bootstrap.
//!
//! Resolves an application's runtime configuration before it starts:
//! the app config document yields tenant-scoped base URLs, the user
//! configuration document is merged into the runtime settings, and the
//! date/locale runtime is derived from the result.

pub mod config;
pub mod environment;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod settings;
pub mod tenancy;
pub mod timing;

pub use config::BootstrapConfig;
pub use environment::ClientEnvironment;
pub use error::{BootstrapError, BootstrapResult};
pub use http::ReqwestTransport;
pub use lifecycle::{PreBootstrap, RuntimeConfig, RuntimeState};
