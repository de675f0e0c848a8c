//! HTTP plumbing for configuration fetches.
//!
//! # Data Flow
//! ```text
//! bootstrap step
//!     → HeaderMap built by the step (insert_header)
//!     → transport.rs (ConfigTransport::get_json)
//!     → serde_json::Value handed back to the step
//! ```

pub mod transport;

pub use transport::{
    insert_header, ConfigTransport, ReqwestTransport, TransportError, TransportResult,
};
