//! Clock providers.
//!
//! A clock provider decides how timestamps are interpreted: as given
//! (unspecified), as UTC, or as the host's local time.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::Serialize;

/// Provider name selecting [`ClockProvider::Unspecified`].
pub const UNSPECIFIED_CLOCK_PROVIDER: &str = "unspecifiedClockProvider";
/// Provider name selecting [`ClockProvider::Utc`].
pub const UTC_CLOCK_PROVIDER: &str = "utcClockProvider";
/// Provider name reported for [`ClockProvider::Local`].
pub const LOCAL_CLOCK_PROVIDER: &str = "localClockProvider";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ClockProvider {
    #[serde(rename = "unspecifiedClockProvider")]
    Unspecified,
    #[serde(rename = "utcClockProvider")]
    Utc,
    #[default]
    #[serde(rename = "localClockProvider")]
    Local,
}

impl ClockProvider {
    /// Select a provider by exact name. Unknown and missing names fall back
    /// to `Local`.
    pub fn select(name: Option<&str>) -> Self {
        match name {
            Some(UNSPECIFIED_CLOCK_PROVIDER) => Self::Unspecified,
            Some(UTC_CLOCK_PROVIDER) => Self::Utc,
            _ => Self::Local,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => UNSPECIFIED_CLOCK_PROVIDER,
            Self::Utc => UTC_CLOCK_PROVIDER,
            Self::Local => LOCAL_CLOCK_PROVIDER,
        }
    }

    /// Only the UTC provider lets users pick a display time zone.
    pub fn supports_multiple_timezone(&self) -> bool {
        matches!(self, Self::Utc)
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Utc => Utc::now().into(),
            Self::Unspecified | Self::Local => Local::now().into(),
        }
    }
}

impl std::fmt::Display for ClockProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_providers() {
        assert_eq!(ClockProvider::select(Some("utcClockProvider")), ClockProvider::Utc);
        assert_eq!(
            ClockProvider::select(Some("unspecifiedClockProvider")),
            ClockProvider::Unspecified
        );
        assert_eq!(ClockProvider::select(Some("localClockProvider")), ClockProvider::Local);
    }

    #[test]
    fn test_unknown_names_default_to_local() {
        assert_eq!(ClockProvider::select(Some("anything-else")), ClockProvider::Local);
        assert_eq!(ClockProvider::select(Some("UtcClockProvider")), ClockProvider::Local);
        assert_eq!(ClockProvider::select(Some("")), ClockProvider::Local);
        assert_eq!(ClockProvider::select(None), ClockProvider::Local);
    }

    #[test]
    fn test_multiple_timezone_support() {
        assert!(ClockProvider::Utc.supports_multiple_timezone());
        assert!(!ClockProvider::Local.supports_multiple_timezone());
        assert!(!ClockProvider::Unspecified.supports_multiple_timezone());
    }

    #[test]
    fn test_serializes_as_provider_name() {
        assert_eq!(
            serde_json::to_string(&ClockProvider::Utc).unwrap(),
            "\"utcClockProvider\""
        );
    }
}
