//! Runtime configuration produced by the bootstrap.
//!
//! `RuntimeConfig` is built once per successful run and never mutated.
//! `RuntimeState` is the process-wide holder: it starts with only the
//! initial settings and swaps in a complete `RuntimeConfig` at the end of a
//! successful run. Failed runs leave it untouched.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use serde::Serialize;
use serde_json::Value;

use crate::tenancy::{AppConfig, ResolvedUrls, TenantContext};
use crate::timing::DateRuntime;

/// Everything the bootstrap resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub app_config: AppConfig,
    pub tenant: TenantContext,
    pub urls: ResolvedUrls,
    /// Initial settings with the user settings bundle merged in.
    pub settings: Value,
    pub dates: DateRuntime,
}

/// Process-wide holder of the current runtime configuration.
pub struct RuntimeState {
    initial_settings: Value,
    current: ArcSwapOption<RuntimeConfig>,
}

impl RuntimeState {
    pub fn new(initial_settings: Value) -> Self {
        Self {
            initial_settings,
            current: ArcSwapOption::empty(),
        }
    }

    /// The published configuration, if a bootstrap has completed.
    pub fn current(&self) -> Option<Arc<RuntimeConfig>> {
        self.current.load_full()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.current.load().is_some()
    }

    /// Settings currently in effect: the last published settings, or the
    /// initial settings before any successful run.
    pub fn settings(&self) -> Value {
        match self.current() {
            Some(config) => config.settings.clone(),
            None => self.initial_settings.clone(),
        }
    }

    pub(crate) fn publish(&self, config: Arc<RuntimeConfig>) {
        self.current.store(Some(config));
    }
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self::new(Value::Object(Default::default()))
    }
}
