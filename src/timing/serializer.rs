//! Date serialization selected at bootstrap.
//!
//! Code that turns dates into strings for the wire asks the `DateSerializer`
//! held by the runtime config instead of relying on process-wide state.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// `YYYY-MM-DDTHH:mm:ssZ` as produced by the invariant "en" locale.
const INVARIANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DateSerializer {
    /// Multi-timezone mode. Dates serialize as UTC ISO-8601 with
    /// milliseconds; `timezone` is the default display zone.
    Zoned { timezone: Tz },
    /// Dates serialize in the invariant "en" format in the host's local
    /// zone, whatever the display locale or input offset is.
    Invariant,
}

impl DateSerializer {
    /// String form used for JSON payloads and ISO conversions.
    pub fn serialize<Z: TimeZone>(&self, dt: &DateTime<Z>) -> String {
        match self {
            Self::Zoned { .. } => dt
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Invariant => dt
                .with_timezone(&Local)
                .format(INVARIANT_FORMAT)
                .to_string(),
        }
    }

    pub fn default_timezone(&self) -> Option<Tz> {
        match self {
            Self::Zoned { timezone } => Some(*timezone),
            Self::Invariant => None,
        }
    }
}
