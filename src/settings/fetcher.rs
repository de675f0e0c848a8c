//! User settings fetch (bootstrap step 2).
//!
//! # Responsibilities
//! - Build culture, tenant and auth headers from client cookies
//! - Fetch the user configuration from the resolved remote service
//! - Unwrap the response envelope into a `UserSettingsBundle`

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::config::{HeaderConfig, ResolverConfig};
use crate::environment::ClientEnvironment;
use crate::error::{BootstrapError, BootstrapResult};
use crate::http::{insert_header, ConfigTransport, TransportError, TransportResult};
use crate::observability::metrics;
use crate::settings::bundle::UserSettingsBundle;

/// Fetches the user/tenant scoped settings bundle.
pub struct UserSettingsFetcher<'a, T: ConfigTransport> {
    transport: &'a T,
    environment: &'a ClientEnvironment,
    resolver: &'a ResolverConfig,
    headers: &'a HeaderConfig,
}

impl<'a, T: ConfigTransport> UserSettingsFetcher<'a, T> {
    pub fn new(
        transport: &'a T,
        environment: &'a ClientEnvironment,
        resolver: &'a ResolverConfig,
        headers: &'a HeaderConfig,
    ) -> Self {
        Self {
            transport,
            environment,
            resolver,
            headers,
        }
    }

    /// Endpoint URL under the resolved remote service base URL.
    pub fn endpoint(&self, remote_service_base_url: &str) -> BootstrapResult<Url> {
        let raw = format!(
            "{}/{}",
            remote_service_base_url.trim_end_matches('/'),
            self.resolver.user_configuration_path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| BootstrapError::fetch(raw.clone(), format!("invalid URL: {e}")))
    }

    /// Request headers for the user configuration call.
    pub fn request_headers(&self) -> TransportResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(culture) = self.environment.cookie(&self.headers.culture_cookie) {
            insert_header(
                &mut headers,
                &self.headers.culture_header,
                &format!("c={culture}|uic={culture}"),
            )?;
        }
        if let Some(tenant_id) = self.environment.tenant_id(&self.headers.tenant_id_cookie) {
            insert_header(&mut headers, &self.headers.tenant_id_cookie, &tenant_id.to_string())?;
        }
        if let Some(token) = self.environment.cookie(&self.headers.auth_token_cookie) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| TransportError::InvalidHeader(AUTHORIZATION.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// GET the user configuration and unwrap its envelope.
    pub async fn fetch_bundle(&self, url: &Url, headers: &HeaderMap) -> BootstrapResult<UserSettingsBundle> {
        let body = self
            .transport
            .get_json(url, headers)
            .await
            .map_err(|e| BootstrapError::fetch(url.as_str(), e))?;

        UserSettingsBundle::from_envelope(body).map_err(|reason| BootstrapError::fetch(url.as_str(), reason))
    }

    /// Fetch and unwrap the settings bundle.
    pub async fn fetch(&self, remote_service_base_url: &str) -> BootstrapResult<UserSettingsBundle> {
        let url = self.endpoint(remote_service_base_url)?;
        let headers = self
            .request_headers()
            .map_err(|e| BootstrapError::fetch(url.as_str(), e))?;

        let start = Instant::now();
        let bundle = self.fetch_bundle(&url, &headers).await;
        metrics::record_fetch(metrics::USER_CONFIGURATION_DOCUMENT, bundle.is_ok(), start);
        let bundle = bundle?;

        tracing::info!(
            url = %url,
            authenticated = headers.contains_key(AUTHORIZATION),
            "User configuration fetched"
        );
        Ok(bundle)
    }
}
