//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BootstrapConfig (validated, immutable)
//!     → handed to PreBootstrap
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the client runs without a file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BootstrapConfig;
pub use schema::HeaderConfig;
pub use schema::ObservabilityConfig;
pub use schema::ResolverConfig;
pub use schema::TimeoutConfig;
