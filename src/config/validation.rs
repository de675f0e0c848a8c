//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty tokens and header names that would silently disable behavior
//! - Validate value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BootstrapConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::BootstrapConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("initial_settings must be a table")]
    SettingsNotTable,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &BootstrapConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let required = [
        ("resolver.app_config_path", &config.resolver.app_config_path),
        ("resolver.tenancy_placeholder", &config.resolver.tenancy_placeholder),
        (
            "resolver.user_configuration_path",
            &config.resolver.user_configuration_path,
        ),
        ("headers.tenant_id_cookie", &config.headers.tenant_id_cookie),
        ("headers.culture_header", &config.headers.culture_header),
        ("headers.culture_cookie", &config.headers.culture_cookie),
        ("headers.auth_token_cookie", &config.headers.auth_token_cookie),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError::Empty(field));
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if !config.initial_settings.is_object() {
        errors.push(ValidationError::SettingsNotTable);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BootstrapConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = BootstrapConfig::default();
        config.resolver.tenancy_placeholder = "  ".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Empty("resolver.tenancy_placeholder")));
        assert!(errors.contains(&ValidationError::ZeroTimeout("timeouts.request_secs")));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = BootstrapConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
