//! Client configuration: API base selection and browser storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are served either from the API origin or opened straight from disk.
//! In the latter case there is no usable origin, so requests go to the local
//! development backend instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Sign-in page every unauthenticated flow redirects to.
pub const SIGNIN_PAGE: &str = "A01_signin_credentials.html";

/// Durable (`localStorage`) key holding the bearer token.
pub const TOKEN_KEY: &str = "demo_token";

/// Durable (`localStorage`) key holding the last selected seat code.
pub const SELECTED_SEAT_KEY: &str = "selectedSeat";

/// Session-scoped (`sessionStorage`) key holding the cached identity JSON.
pub const CURRENT_USER_CACHE_KEY: &str = "current_user_cache";

/// API base used when the page has no usable origin.
pub const LOCAL_FALLBACK_BASE: &str = "http://127.0.0.1:8000";

/// Resolved client settings shared by the request helper and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub signin_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: LOCAL_FALLBACK_BASE.to_owned(),
            signin_page: SIGNIN_PAGE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at `api_base`.
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Read the page location and resolve the API base from it.
    pub fn from_location() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(location) = web_sys::window().map(|w| w.location()) else {
                return Self::default();
            };
            let protocol = location.protocol().unwrap_or_default();
            let origin = location.origin().ok();
            Self::with_base(resolve_api_base(&protocol, origin.as_deref()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for an API `path` such as `/api/auth/me`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }
}

/// Pick the page origin unless it is a `file:` page or has no real origin.
pub fn resolve_api_base(protocol: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if protocol != "file:" && !origin.is_empty() && origin != "null" => origin.to_owned(),
        _ => LOCAL_FALLBACK_BASE.to_owned(),
    }
}
