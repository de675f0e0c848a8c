//! Bootstrap error definitions.

use thiserror::Error;

/// Errors that abort the pre-bootstrap sequence.
///
/// Both kinds are fatal: the continuation is never invoked and the published
/// runtime state keeps whatever value it had before the run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A configuration document could not be fetched or had malformed content.
    #[error("Failed to fetch configuration from {url}: {reason}")]
    ConfigFetch { url: String, reason: String },

    /// The merged settings did not have the shape needed to patch the runtime.
    #[error("Failed to apply runtime settings: {0}")]
    PatchApplication(String),
}

impl BootstrapError {
    /// Build a fetch failure for `url`.
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::ConfigFetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigFetch { .. } => "config_fetch",
            Self::PatchApplication(_) => "patch_application",
        }
    }
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = BootstrapError::fetch("https://host/assets/appconfig.json", "status 404");
        assert_eq!(
            err.to_string(),
            "Failed to fetch configuration from https://host/assets/appconfig.json: status 404"
        );
        assert_eq!(err.kind(), "config_fetch");
    }

    #[test]
    fn test_patch_error_kind() {
        let err = BootstrapError::PatchApplication("missing clock".into());
        assert_eq!(err.kind(), "patch_application");
        assert!(err.to_string().contains("missing clock"));
    }
}
