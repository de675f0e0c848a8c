//! Configuration schema definitions.
//!
//! This module defines the settings that drive the pre-bootstrap sequence.
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the bootstrap client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Where to find the app config document and how tenant URLs are templated.
    pub resolver: ResolverConfig,

    /// Header and cookie names exchanged with the server.
    pub headers: HeaderConfig,

    /// Transport timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Settings visible before the user configuration is merged in.
    pub initial_settings: Value,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            headers: HeaderConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            initial_settings: Value::Object(Default::default()),
        }
    }
}

/// Tenant URL resolution settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Path of the app config document, relative to the app root URL.
    pub app_config_path: String,

    /// Literal token marking the tenant insertion point in URL templates.
    pub tenancy_placeholder: String,

    /// Path of the user configuration endpoint on the remote service.
    pub user_configuration_path: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            app_config_path: "assets/appconfig.json".to_string(),
            tenancy_placeholder: "{TENANCY_NAME}".to_string(),
            user_configuration_path: "/AbpUserConfiguration/GetAll".to_string(),
        }
    }
}

/// Header and cookie names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Cookie holding the tenant id; also used as the request header name.
    pub tenant_id_cookie: String,

    /// Header carrying the culture selection.
    pub culture_header: String,

    /// Cookie holding the selected culture name.
    pub culture_cookie: String,

    /// Cookie holding the bearer token.
    pub auth_token_cookie: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            tenant_id_cookie: "Abp.TenantId".to_string(),
            culture_header: ".AspNetCore.Culture".to_string(),
            culture_cookie: "Abp.Localization.CultureName".to_string(),
            auth_token_cookie: "Abp.AuthToken".to_string(),
        }
    }
}

/// Timeout configuration for configuration fetches.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
