//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! PreBootstrap::run (startup.rs):
//!     TenantUrlResolver → UserSettingsFetcher → deep merge
//!     → RuntimeEnvironmentPatcher → RuntimeState::publish (state.rs)
//!     → abp.dynamicScriptsInitialized (events.rs) → continuation
//! ```
//!
//! # Design Decisions
//! - Ordered startup: each step starts after the previous one finished
//! - A failed run leaves the published state as it was

pub mod events;
pub mod startup;
pub mod state;

pub use events::{EventBus, DYNAMIC_SCRIPTS_INITIALIZED};
pub use startup::PreBootstrap;
pub use state::{RuntimeConfig, RuntimeState};
