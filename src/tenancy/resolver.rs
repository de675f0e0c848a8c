//! Tenant URL resolution (bootstrap step 1).
//!
//! # Responsibilities
//! - Fetch the app config document from the static assets
//! - Detect the tenant from the current URL
//! - Rewrite the base URL templates into concrete URLs

use std::time::Instant;

use reqwest::header::HeaderMap;
use url::Url;

use crate::config::{HeaderConfig, ResolverConfig};
use crate::environment::ClientEnvironment;
use crate::error::{BootstrapError, BootstrapResult};
use crate::http::{insert_header, ConfigTransport, TransportResult};
use crate::observability::metrics;
use crate::tenancy::finder::TenancyNameFinder;
use crate::tenancy::types::{AppConfig, TenantContext, TenantResolution};
use crate::tenancy::urls::resolve_urls;

/// Resolves tenant-scoped base URLs from the app config document.
pub struct TenantUrlResolver<'a, T: ConfigTransport> {
    transport: &'a T,
    environment: &'a ClientEnvironment,
    finder: &'a dyn TenancyNameFinder,
    resolver: &'a ResolverConfig,
    headers: &'a HeaderConfig,
}

impl<'a, T: ConfigTransport> TenantUrlResolver<'a, T> {
    pub fn new(
        transport: &'a T,
        environment: &'a ClientEnvironment,
        finder: &'a dyn TenancyNameFinder,
        resolver: &'a ResolverConfig,
        headers: &'a HeaderConfig,
    ) -> Self {
        Self {
            transport,
            environment,
            finder,
            resolver,
            headers,
        }
    }

    /// URL of the app config document under `app_root_url`.
    pub fn app_config_url(&self, app_root_url: &str) -> BootstrapResult<Url> {
        let mut raw = app_root_url.to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        raw.push_str(self.resolver.app_config_path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| BootstrapError::fetch(raw.clone(), format!("invalid URL: {e}")))
    }

    /// Headers sent with the app config request.
    pub fn request_headers(&self) -> TransportResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(tenant_id) = self.environment.tenant_id(&self.headers.tenant_id_cookie) {
            insert_header(&mut headers, &self.headers.tenant_id_cookie, &tenant_id.to_string())?;
        }
        Ok(headers)
    }

    /// GET and decode the app config document.
    pub async fn fetch_app_config(&self, url: &Url, headers: &HeaderMap) -> BootstrapResult<AppConfig> {
        let body = self
            .transport
            .get_json(url, headers)
            .await
            .map_err(|e| BootstrapError::fetch(url.as_str(), e))?;

        serde_json::from_value(body)
            .map_err(|e| BootstrapError::fetch(url.as_str(), format!("malformed app config: {e}")))
    }

    /// Fetch the app config and resolve the tenant URLs.
    pub async fn resolve(&self, app_root_url: &str) -> BootstrapResult<TenantResolution> {
        let url = self.app_config_url(app_root_url)?;
        let headers = self
            .request_headers()
            .map_err(|e| BootstrapError::fetch(url.as_str(), e))?;

        let start = Instant::now();
        let app_config = self.fetch_app_config(&url, &headers).await;
        metrics::record_fetch(metrics::APP_CONFIG_DOCUMENT, app_config.is_ok(), start);
        let app_config = app_config?;

        let tenant = TenantContext {
            tenancy_name: self
                .finder
                .find(self.environment.current_url().as_str(), &app_config.app_base_url_format),
        };
        let urls = resolve_urls(&app_config, &tenant, &self.resolver.tenancy_placeholder);

        tracing::info!(
            tenancy_name = tenant.tenancy_name.as_deref().unwrap_or("<host>"),
            app_base_url = %urls.app_base_url,
            remote_service_base_url = %urls.remote_service_base_url,
            "Tenant URLs resolved"
        );

        Ok(TenantResolution {
            app_config,
            tenant,
            urls,
        })
    }
}
