//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so `API_BASE_URL` is read with
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_V1_PREFIX: &str = "/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the remote API, without a trailing slash.
    pub api_base_url: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `API_BASE_URL`: default `http://localhost:8000`
    /// - `API_PAGE_SIZE`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("API_BASE_URL"), option_env!("API_PAGE_SIZE"))
    }

    fn from_raw(base_url: Option<&str>, page_size: Option<&str>) -> Self {
        Self { api_base_url: normalize_base_url(base_url), page_size: parse_page_size(page_size) }
    }

    /// Absolute URL for a path under the versioned API prefix.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{API_V1_PREFIX}/{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
