//! Runtime environment patch (bootstrap step 3).
//!
//! # Responsibilities
//! - Select the clock provider from the fetched bundle
//! - Map the current language to the date library's locale name
//! - Pick the default time zone or the invariant serializer

use chrono_tz::Tz;
use serde_json::Value;

use crate::error::{BootstrapError, BootstrapResult};
use crate::settings::UserSettingsBundle;
use crate::tenancy::LocaleMappings;
use crate::timing::clock::ClockProvider;
use crate::timing::locale::{LocaleMappingService, DATE_LOCALE_TARGET};
use crate::timing::serializer::DateSerializer;
use crate::timing::DateRuntime;

const CURRENT_LANGUAGE_POINTER: &str = "/localization/currentLanguage/name";
const TIME_ZONE_POINTER: &str = "/timing/timeZoneInfo/iana/timeZoneId";

/// Derives the date runtime from merged settings.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeEnvironmentPatcher<'a> {
    locale_mappings: Option<&'a LocaleMappings>,
}

impl<'a> RuntimeEnvironmentPatcher<'a> {
    pub fn new(locale_mappings: Option<&'a LocaleMappings>) -> Self {
        Self { locale_mappings }
    }

    /// Build the date runtime.
    ///
    /// `bundle` is the freshly fetched settings (source of the clock
    /// provider); `settings` is the merged settings object.
    pub fn apply(&self, bundle: &UserSettingsBundle, settings: &Value) -> BootstrapResult<DateRuntime> {
        if !bundle.has_clock() {
            return Err(BootstrapError::PatchApplication(
                "settings bundle has no 'clock' section".to_string(),
            ));
        }
        let clock = ClockProvider::select(bundle.clock_provider_name());

        let language = settings
            .pointer(CURRENT_LANGUAGE_POINTER)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BootstrapError::PatchApplication(
                    "settings have no localization.currentLanguage.name".to_string(),
                )
            })?;
        let display_locale =
            LocaleMappingService::new(self.locale_mappings).map(DATE_LOCALE_TARGET, language);

        let serializer = if clock.supports_multiple_timezone() {
            let timezone_id = settings
                .pointer(TIME_ZONE_POINTER)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    BootstrapError::PatchApplication(
                        "settings have no timing.timeZoneInfo.iana.timeZoneId".to_string(),
                    )
                })?;
            let timezone: Tz = timezone_id.parse().map_err(|e| {
                BootstrapError::PatchApplication(format!("unknown time zone '{timezone_id}': {e}"))
            })?;
            DateSerializer::Zoned { timezone }
        } else {
            DateSerializer::Invariant
        };

        tracing::info!(
            clock = %clock,
            language,
            display_locale = %display_locale,
            timezone = serializer.default_timezone().map(|tz| tz.name()).unwrap_or("-"),
            "Runtime date settings applied"
        );

        Ok(DateRuntime {
            display_locale,
            clock,
            serializer,
        })
    }
}
