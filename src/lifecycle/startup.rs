//! Startup orchestration.
//!
//! # Responsibilities
//! - Run the three bootstrap steps strictly in order
//! - Merge the user settings over the settings currently in effect
//! - Publish the runtime config and the "configuration applied" event
//! - Hand control to the caller's continuation
//!
//! # Design Decisions
//! - Fail fast: any step error is fatal, no retries
//! - Nothing is published until every step has succeeded

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::config::BootstrapConfig;
use crate::environment::ClientEnvironment;
use crate::error::BootstrapResult;
use crate::http::ConfigTransport;
use crate::lifecycle::events::{EventBus, DYNAMIC_SCRIPTS_INITIALIZED};
use crate::lifecycle::state::{RuntimeConfig, RuntimeState};
use crate::observability::metrics;
use crate::settings::{deep_merge, UserSettingsFetcher};
use crate::tenancy::{SubdomainTenancyNameFinder, TenancyNameFinder, TenantUrlResolver};
use crate::timing::RuntimeEnvironmentPatcher;

/// The configuration resolver run before the application starts.
pub struct PreBootstrap<T: ConfigTransport> {
    transport: T,
    environment: ClientEnvironment,
    config: BootstrapConfig,
    finder: Box<dyn TenancyNameFinder>,
    state: Arc<RuntimeState>,
    events: EventBus,
}

impl<T: ConfigTransport> PreBootstrap<T> {
    /// Create a resolver with the subdomain tenancy finder, a fresh
    /// `RuntimeState` seeded from `config.initial_settings`, and a new bus.
    pub fn new(transport: T, environment: ClientEnvironment, config: BootstrapConfig) -> Self {
        let finder = Box::new(SubdomainTenancyNameFinder::new(
            config.resolver.tenancy_placeholder.clone(),
        ));
        let state = Arc::new(RuntimeState::new(config.initial_settings.clone()));
        Self {
            transport,
            environment,
            config,
            finder,
            state,
            events: EventBus::new(),
        }
    }

    pub fn with_finder(mut self, finder: impl TenancyNameFinder + 'static) -> Self {
        self.finder = Box::new(finder);
        self
    }

    /// Share an existing state holder (e.g. across repeated bootstraps).
    pub fn with_state(mut self, state: Arc<RuntimeState>) -> Self {
        self.state = state;
        self
    }

    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub fn state(&self) -> &Arc<RuntimeState> {
        &self.state
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Resolve, fetch and apply the configuration.
    pub async fn run(&self, app_root_url: &str) -> BootstrapResult<Arc<RuntimeConfig>> {
        let bootstrap_id = Uuid::new_v4();
        let span = tracing::info_span!("bootstrap", %bootstrap_id, app_root_url);

        let result = self.run_steps(app_root_url).instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(_) => {
                metrics::record_run("success");
                tracing::info!("Bootstrap complete");
            }
            Err(e) => {
                metrics::record_run(e.kind());
                tracing::error!(error = %e, "Bootstrap failed; application will not start");
            }
        });
        result
    }

    /// Run the bootstrap and invoke `continuation` only if it succeeds.
    pub async fn run_then<F, R>(&self, app_root_url: &str, continuation: F) -> BootstrapResult<R>
    where
        F: FnOnce(Arc<RuntimeConfig>) -> R,
    {
        let config = self.run(app_root_url).await?;
        Ok(continuation(config))
    }

    async fn run_steps(&self, app_root_url: &str) -> BootstrapResult<Arc<RuntimeConfig>> {
        let resolution = TenantUrlResolver::new(
            &self.transport,
            &self.environment,
            self.finder.as_ref(),
            &self.config.resolver,
            &self.config.headers,
        )
        .resolve(app_root_url)
        .await?;

        let bundle = UserSettingsFetcher::new(
            &self.transport,
            &self.environment,
            &self.config.resolver,
            &self.config.headers,
        )
        .fetch(&resolution.urls.remote_service_base_url)
        .await?;

        let mut settings = self.state.settings();
        deep_merge(&mut settings, bundle.as_value());

        let dates = RuntimeEnvironmentPatcher::new(resolution.app_config.locale_mappings.as_ref())
            .apply(&bundle, &settings)?;

        let config = Arc::new(RuntimeConfig {
            app_config: resolution.app_config,
            tenant: resolution.tenant,
            urls: resolution.urls,
            settings,
            dates,
        });

        self.state.publish(config.clone());
        let receivers = self.events.trigger(DYNAMIC_SCRIPTS_INITIALIZED);
        tracing::debug!(event = DYNAMIC_SCRIPTS_INITIALIZED, receivers, "Event published");

        Ok(config)
    }
}
