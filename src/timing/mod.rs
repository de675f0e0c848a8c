//! Date/time runtime subsystem.
//!
//! # Data Flow
//! ```text
//! UserSettingsBundle + merged settings
//!     → clock.rs (provider by exact name, Local otherwise)
//!     → locale.rs (display locale via the app config mappings)
//!     → serializer.rs (zoned or invariant date serialization)
//!     → DateRuntime (held by RuntimeConfig)
//! ```

pub mod clock;
pub mod locale;
pub mod patcher;
pub mod serializer;

pub use clock::ClockProvider;
pub use locale::LocaleMappingService;
pub use patcher::RuntimeEnvironmentPatcher;
pub use serializer::DateSerializer;

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

/// Date handling settings resolved at bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRuntime {
    /// Date library locale used for display formatting.
    pub display_locale: String,
    pub clock: ClockProvider,
    pub serializer: DateSerializer,
}

impl DateRuntime {
    /// Current time as seen by the selected clock provider.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    pub fn serialize<Z: TimeZone>(&self, dt: &DateTime<Z>) -> String {
        self.serializer.serialize(dt)
    }

    pub fn default_timezone(&self) -> Option<Tz> {
        self.serializer.default_timezone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_follows_clock() {
        let runtime = DateRuntime {
            display_locale: "en".to_string(),
            clock: ClockProvider::Utc,
            serializer: DateSerializer::Zoned { timezone: chrono_tz::UTC },
        };
        let now = runtime.now();
        assert_eq!(now.offset().local_minus_utc(), 0);

        let rendered = runtime.serialize(&now);
        assert!(rendered.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert!((parsed - now).num_milliseconds().abs() < 1);
    }
}
