//! User settings subsystem.
//!
//! # Data Flow
//! ```text
//! GET <remote service>/AbpUserConfiguration/GetAll
//!     → bundle.rs (unwrap { success, result, error })
//!     → merge.rs (deep overlay onto the current settings)
//! ```

pub mod bundle;
pub mod fetcher;
pub mod merge;

pub use bundle::UserSettingsBundle;
pub use fetcher::UserSettingsFetcher;
pub use merge::deep_merge;
