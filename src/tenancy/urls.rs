//! Tenant substitution in URL templates.

use crate::tenancy::types::{AppConfig, ResolvedUrls, TenantContext};

/// Apply the tenancy name to a single URL template.
///
/// With a tenant, every placeholder is replaced by the tenancy name. Without
/// one, the placeholder and the `.` that follows it are removed; a placeholder
/// not followed by `.` is removed on its own.
pub fn apply_tenancy(template: &str, tenancy_name: Option<&str>, placeholder: &str) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }
    match tenancy_name {
        Some(name) => template.replace(placeholder, name),
        None => template
            .replace(&format!("{placeholder}."), "")
            .replace(placeholder, ""),
    }
}

/// Resolve both base URLs of an app config for the given tenant.
pub fn resolve_urls(config: &AppConfig, tenant: &TenantContext, placeholder: &str) -> ResolvedUrls {
    let name = tenant.tenancy_name.as_deref();
    ResolvedUrls {
        app_base_url: apply_tenancy(&config.app_base_url_format, name, placeholder),
        remote_service_base_url: apply_tenancy(
            &config.remote_service_base_url_format,
            name,
            placeholder,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PH: &str = "{TENANT}";

    fn config() -> AppConfig {
        AppConfig {
            app_base_url_format: "https://{TENANT}.app.com/".into(),
            remote_service_base_url_format: "https://{TENANT}.api.com/".into(),
            locale_mappings: None,
        }
    }

    #[test]
    fn test_tenant_replaces_placeholder() {
        let urls = resolve_urls(&config(), &TenantContext::tenant("acme"), PH);
        assert_eq!(urls.app_base_url, "https://acme.app.com/");
        assert_eq!(urls.remote_service_base_url, "https://acme.api.com/");
    }

    #[test]
    fn test_host_removes_placeholder_and_separator() {
        let urls = resolve_urls(&config(), &TenantContext::host(), PH);
        assert_eq!(urls.app_base_url, "https://app.com/");
        assert_eq!(urls.remote_service_base_url, "https://api.com/");
    }

    #[test]
    fn test_host_never_leaves_placeholder() {
        let templates = [
            "https://{TENANT}.app.com/",
            "https://app.com/{TENANT}/",
            "https://{TENANT}.{TENANT}.app.com/",
            "https://app.com/",
        ];
        for template in templates {
            let resolved = apply_tenancy(template, None, PH);
            assert!(!resolved.contains(PH), "{template} -> {resolved}");
            assert!(!resolved.contains("{TENANT}."), "{template} -> {resolved}");
        }
    }

    #[test]
    fn test_tenant_appears_only_at_placeholder() {
        let resolved = apply_tenancy("https://{TENANT}.app.com/path", Some("t"), PH);
        assert_eq!(resolved, "https://t.app.com/path");
        assert!(!resolved.contains(PH));
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        assert_eq!(
            apply_tenancy("http://127.0.0.1:8080", Some("acme"), PH),
            "http://127.0.0.1:8080"
        );
        assert_eq!(apply_tenancy("http://127.0.0.1:8080", None, PH), "http://127.0.0.1:8080");
    }
}
