// SPDX-License-Identifier: MPL-2.0
//! Resolution of remote asset URLs.
//!
//! Flag images live on the platform CDN; the catalog only stores relative
//! paths. `ApiBase` is the opaque base-URL provider those paths are joined
//! against. This crate never fetches the URLs itself; they are handed to
//! whatever renders or exports them.

/// Environment variable supplying the asset base URL.
pub const ENV_API_BASE: &str = "VITAL_ATLAS_API_BASE";

/// An opaque base URL, possibly empty.
///
/// With an empty base, relative paths are returned unchanged; already
/// absolute URLs are never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    /// Resolves the base URL: config value first, then the
    /// `VITAL_ATLAS_API_BASE` environment variable, else empty.
    #[must_use]
    pub fn resolve(config_value: Option<&str>) -> Self {
        if let Some(value) = config_value {
            if !value.is_empty() {
                return Self::from_base(value);
            }
        }
        match std::env::var(ENV_API_BASE) {
            Ok(value) if !value.is_empty() => Self::from_base(value),
            _ => Self::default(),
        }
    }

    /// Creates a provider from an explicit base, trimming a trailing slash.
    #[must_use]
    pub fn from_base(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// The raw base URL (may be empty).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Joins the base with a relative asset path.
    #[must_use]
    pub fn asset_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_string();
        }
        if self.base.is_empty() {
            return relative.to_string();
        }
        format!("{}/{}", self.base, relative.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_returns_relative_path_unchanged() {
        let base = ApiBase::default();
        assert_eq!(base.asset_url("flags/sau.svg"), "flags/sau.svg");
    }

    #[test]
    fn base_is_joined_with_single_slash() {
        let base = ApiBase::from_base("https://cdn.example.org/");
        assert_eq!(
            base.asset_url("flags/sau.svg"),
            "https://cdn.example.org/flags/sau.svg"
        );
        assert_eq!(
            base.asset_url("/flags/sau.svg"),
            "https://cdn.example.org/flags/sau.svg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let base = ApiBase::from_base("https://cdn.example.org");
        assert_eq!(
            base.asset_url("https://elsewhere.example/x.svg"),
            "https://elsewhere.example/x.svg"
        );
    }

    #[test]
    fn config_value_wins_over_environment() {
        // Scoped to this test: resolve() reads the env var only when the
        // config value is absent or empty.
        let resolved = ApiBase::resolve(Some("https://configured.example"));
        assert_eq!(resolved.as_str(), "https://configured.example");

        let empty_config = ApiBase::resolve(Some(""));
        // Falls through to env/default; either way it is not the empty
        // config string that got used verbatim with a trailing join.
        assert!(!empty_config.asset_url("a/b").starts_with('/'));
    }
}
