//! Build-time configuration for reaching the REST backend.
//!
//! The bundle runs in the browser, so there is no process environment to
//! read at startup: the base path is baked in when the crate is compiled.

/// Backend used when `FOOD_DEVIL_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://food-devil-backend.herokuapp.com";

/// Where API requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; route paths are appended verbatim.
    pub base_url: String,
}

impl ApiConfig {
    /// Load configuration captured from the build environment.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("FOOD_DEVIL_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a route path such as `/reviews/abc`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
