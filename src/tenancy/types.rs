//! Tenancy and app config types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One canonical → library-specific locale name mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleMapping {
    pub from: String,
    pub to: String,
}

/// Locale mappings keyed by target system (e.g. `"moment"`).
pub type LocaleMappings = BTreeMap<String, Vec<LocaleMapping>>;

/// Application-level config document served with the static assets.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// App base URL template, possibly containing the tenancy placeholder.
    #[serde(rename = "appBaseUrl")]
    pub app_base_url_format: String,

    /// Remote service base URL template.
    #[serde(rename = "remoteServiceBaseUrl")]
    pub remote_service_base_url_format: String,

    /// Absent or `null` means no mappings are configured.
    #[serde(default)]
    pub locale_mappings: Option<LocaleMappings>,
}

/// Tenant detected from the current URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantContext {
    pub tenancy_name: Option<String>,
}

impl TenantContext {
    pub fn host() -> Self {
        Self { tenancy_name: None }
    }

    pub fn tenant(name: impl Into<String>) -> Self {
        Self {
            tenancy_name: Some(name.into()),
        }
    }

    pub fn is_host(&self) -> bool {
        self.tenancy_name.is_none()
    }
}

/// Concrete URLs after tenant substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUrls {
    pub app_base_url: String,
    pub remote_service_base_url: String,
}

/// Output of the tenant URL resolution step.
#[derive(Debug, Clone)]
pub struct TenantResolution {
    pub app_config: AppConfig,
    pub tenant: TenantContext,
    pub urls: ResolvedUrls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_from_json() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "appBaseUrl": "https://{TENANCY_NAME}.app.com/",
                "remoteServiceBaseUrl": "https://{TENANCY_NAME}.api.com/",
                "localeMappings": {
                    "moment": [{ "from": "zh-Hans", "to": "zh-cn" }]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.app_base_url_format, "https://{TENANCY_NAME}.app.com/");
        let moment = &config.locale_mappings.unwrap()["moment"];
        assert_eq!(moment[0].to, "zh-cn");
    }

    #[test]
    fn test_null_locale_mappings() {
        let config: AppConfig = serde_json::from_str(
            r#"{"appBaseUrl": "a", "remoteServiceBaseUrl": "b", "localeMappings": null}"#,
        )
        .unwrap();
        assert!(config.locale_mappings.is_none());
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let result = serde_json::from_str::<AppConfig>(r#"{"remoteServiceBaseUrl": "b"}"#);
        assert!(result.is_err());
    }
}
