//! Locale name mapping between the canonical names the server uses and the
//! names a particular formatting library expects.

use crate::tenancy::LocaleMappings;

/// Target system name used for date formatting.
pub const DATE_LOCALE_TARGET: &str = "moment";

/// Looks up locale names in the app config's mapping table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleMappingService<'a> {
    mappings: Option<&'a LocaleMappings>,
}

impl<'a> LocaleMappingService<'a> {
    pub fn new(mappings: Option<&'a LocaleMappings>) -> Self {
        Self { mappings }
    }

    /// Map `locale` for `target`; names without a mapping pass through.
    pub fn map(&self, target: &str, locale: &str) -> String {
        self.mappings
            .and_then(|m| m.get(target))
            .and_then(|entries| entries.iter().find(|e| e.from == locale))
            .map(|e| e.to.clone())
            .unwrap_or_else(|| locale.to_string())
    }
}
