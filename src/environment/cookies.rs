//! Minimal cookie jar standing in for the browser's `document.cookie`.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Name/value cookie store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Cookie` header style string (`a=1; b=2`).
    ///
    /// Fragments without `=` are ignored.
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::new();
        for pair in header.split(';') {
            if let Ok(cookie) = pair.parse::<CookiePair>() {
                jar.set(cookie.name, cookie.value);
            }
        }
        jar
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    /// Value of a cookie, treating empty values as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

/// A single `NAME=VALUE` pair, as accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
}

impl FromStr for CookiePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s.trim()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err("cookie name must not be empty".to_string());
        }
        Ok(Self {
            name: name.to_string(),
            value: value.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let jar = CookieJar::parse("Abp.TenantId=3; Abp.Localization.CultureName=tr ; junk");
        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("Abp.TenantId"), Some("3"));
        assert_eq!(jar.get("Abp.Localization.CultureName"), Some("tr"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let mut jar = CookieJar::new();
        jar.set("Abp.AuthToken", "");
        assert_eq!(jar.get("Abp.AuthToken"), None);
    }

    #[test]
    fn test_cookie_pair_keeps_equals_in_value() {
        let pair: CookiePair = "token=abc=def".parse().unwrap();
        assert_eq!(pair.name, "token");
        assert_eq!(pair.value, "abc=def");
        assert!("=value".parse::<CookiePair>().is_err());
        assert!("novalue".parse::<CookiePair>().is_err());
    }
}
