//! Tenancy name detection from the current URL.

/// Extracts the tenancy name from the current URL given a URL format.
pub trait TenancyNameFinder: Send + Sync {
    /// Returns `None` when the format has no placeholder or the URL does not
    /// carry a tenant segment.
    fn find(&self, current_url: &str, url_format: &str) -> Option<String>;
}

/// Matches a subdomain-style format such as `https://{TENANCY_NAME}.app.com/`.
///
/// The current URL must begin with the text before the placeholder and
/// contain the text after it, up to and including the next `/`. The captured
/// segment must be non-empty and may not contain `.` or `/`.
#[derive(Debug, Clone)]
pub struct SubdomainTenancyNameFinder {
    placeholder: String,
}

impl SubdomainTenancyNameFinder {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl TenancyNameFinder for SubdomainTenancyNameFinder {
    fn find(&self, current_url: &str, url_format: &str) -> Option<String> {
        let idx = url_format.find(&self.placeholder)?;
        let prefix = &url_format[..idx];
        let rest = &url_format[idx + self.placeholder.len()..];
        let anchor = match rest.find('/') {
            Some(slash) => &rest[..=slash],
            None => rest,
        };

        if current_url.len() < prefix.len()
            || !current_url.is_char_boundary(prefix.len())
            || !current_url[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return None;
        }
        let candidate = &current_url[prefix.len()..];

        let end = if anchor.is_empty() {
            candidate
                .find(|c: char| c == '/' || c == ':' || c == '?' || c == '#')
                .unwrap_or(candidate.len())
        } else {
            let lowered = candidate.to_ascii_lowercase();
            lowered.find(&anchor.to_ascii_lowercase())?
        };

        let name = &candidate[..end];
        if name.is_empty() || name.contains(|c: char| c == '.' || c == '/') {
            return None;
        }
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> SubdomainTenancyNameFinder {
        SubdomainTenancyNameFinder::new("{TENANCY_NAME}")
    }

    #[test]
    fn test_finds_subdomain() {
        let name = finder().find("https://acme.app.com/", "https://{TENANCY_NAME}.app.com/");
        assert_eq!(name.as_deref(), Some("acme"));
    }

    #[test]
    fn test_finds_subdomain_with_path_and_port() {
        let name = finder().find(
            "http://acme.localhost:4200/app/main/dashboard",
            "http://{TENANCY_NAME}.localhost:4200/",
        );
        assert_eq!(name.as_deref(), Some("acme"));
    }

    #[test]
    fn test_no_subdomain() {
        assert_eq!(
            finder().find("https://app.com/", "https://{TENANCY_NAME}.app.com/"),
            None
        );
    }

    #[test]
    fn test_format_without_placeholder() {
        assert_eq!(finder().find("https://acme.app.com/", "https://app.com/"), None);
    }

    #[test]
    fn test_nested_subdomain_is_not_a_tenant() {
        assert_eq!(
            finder().find("https://a.b.app.com/", "https://{TENANCY_NAME}.app.com/"),
            None
        );
    }

    #[test]
    fn test_scheme_mismatch() {
        assert_eq!(
            finder().find("http://acme.app.com/", "https://{TENANCY_NAME}.app.com/"),
            None
        );
    }
}
