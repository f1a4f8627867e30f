//! Authenticated request helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through `AuthClient::request`, which attaches the
//! stored bearer token and reacts to a 401 by dropping the token and sending
//! the browser to the sign-in page. Pages use `require_auth` as a load-time
//! guard and `fetch_current_user` for the tab-scoped identity cache.
//!
//! ERROR HANDLING
//! ==============
//! 401 handling is uniform across call sites, including background calls.
//! The one exception is `login`, where a 401 means rejected credentials.
//! Identity lookups never surface errors; they degrade to `None`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, FetchTransport, HttpTransport, RequestOptions};
use super::types::CurrentUser;
use crate::config::{CURRENT_USER_CACHE_KEY, ClientConfig, TOKEN_KEY};
use crate::error::ApiError;
use crate::util::navigate::{BrowserNavigator, Navigator};
use crate::util::storage::{KeyValueStore, WebStorage, load_json, save_json};

/// Request helper bound to a transport, durable and session stores, and a navigator.
#[derive(Clone, Debug)]
pub struct AuthClient<T, S, N> {
    config: ClientConfig,
    transport: T,
    durable: S,
    session: S,
    navigator: N,
}

/// The helper as wired in the browser.
pub type BrowserAuthClient = AuthClient<FetchTransport, WebStorage, BrowserNavigator>;

/// Build the browser helper from the current page location.
pub fn browser_client() -> BrowserAuthClient {
    AuthClient::new(
        ClientConfig::from_location(),
        FetchTransport,
        WebStorage::local(),
        WebStorage::session(),
        BrowserNavigator,
    )
}

impl<T, S, N> AuthClient<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(config: ClientConfig, transport: T, durable: S, session: S, navigator: N) -> Self {
        Self {
            config,
            transport,
            durable,
            session,
            navigator,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Durable store shared with the seat picker.
    pub fn durable_store(&self) -> &S {
        &self.durable
    }

    /// Stored bearer token. An empty value counts as absent.
    pub fn token(&self) -> Option<String> {
        self.durable.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Store a freshly issued token. Any cached identity belongs to the
    /// previous session and is dropped.
    pub fn set_token(&self, token: &str) {
        self.durable.set(TOKEN_KEY, token);
        self.session.remove(CURRENT_USER_CACHE_KEY);
    }

    /// Page-load guard: return the token, or redirect to sign-in and fail.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingToken` when no token is stored.
    pub fn require_auth(&self) -> Result<String, ApiError> {
        match self.token() {
            Some(token) => Ok(token),
            None => {
                self.navigator.redirect(&self.config.signin_page);
                Err(ApiError::MissingToken)
            }
        }
    }

    /// Drop the token and cached identity, then go to sign-in.
    pub fn logout(&self) {
        self.durable.remove(TOKEN_KEY);
        self.session.remove(CURRENT_USER_CACHE_KEY);
        self.navigator.redirect(&self.config.signin_page);
    }

    /// Resolve `path` and `options` into the request that goes on the wire.
    ///
    /// Header order: JSON content type, caller headers (replacing same-named
    /// defaults), then the bearer header when a token is stored.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        for (name, value) in options.headers {
            headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }
        if let Some(token) = self.token() {
            headers.retain(|(key, _)| !key.eq_ignore_ascii_case("Authorization"));
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        ApiRequest {
            method: options.method,
            url: self.config.url(path),
            headers,
            body: options.body,
        }
    }

    /// Issue a request with bearer auth.
    ///
    /// Any status other than 401 is returned unchanged, with no retry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` after clearing the token and
    /// redirecting when the server answers 401, or the transport's error.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        let resp = self.request_unguarded(path, options).await?;
        if resp.status == 401 {
            log::warn!("Unauthorized, redirecting to login");
            self.durable.remove(TOKEN_KEY);
            self.navigator.redirect(&self.config.signin_page);
            return Err(ApiError::Unauthorized);
        }
        Ok(resp)
    }

    /// Issue a request without the 401 logout and redirect.
    ///
    /// Only for calls made from the sign-in page itself, where a 401 means
    /// rejected credentials rather than an expired session.
    ///
    /// # Errors
    ///
    /// Returns the transport's error.
    pub(crate) async fn request_unguarded(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(path, options);
        log::debug!("{} {}", request.method.as_str(), request.url);
        self.transport.send(request).await
    }

    /// `GET` `path` and decode a 2xx JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-2xx responses, plus anything
    /// `request` or decoding can return.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.request(path, RequestOptions::get()).await?;
        decode_success(&resp)
    }

    /// `POST` `body` as JSON to `path` and decode a 2xx JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::get_json`].
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self.request(path, RequestOptions::post_json(body)?).await?;
        decode_success(&resp)
    }

    /// `DELETE` `path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-2xx responses, plus anything
    /// `request` can return.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.request(path, RequestOptions::delete()).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(())
    }

    /// Current identity, served from the session cache unless `force` is set.
    ///
    /// Without a token this returns `None` without touching the network.
    /// Only successful, parseable responses are cached.
    pub async fn fetch_current_user(&self, force: bool) -> Option<CurrentUser> {
        if !force {
            if let Some(cached) = load_json::<CurrentUser>(&self.session, CURRENT_USER_CACHE_KEY) {
                return Some(cached);
            }
        }
        self.token()?;
        let resp = match self.request("/api/auth/me", RequestOptions::get()).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("fetch_current_user error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        let user = resp.json::<CurrentUser>().ok()?;
        save_json(&self.session, CURRENT_USER_CACHE_KEY, &user);
        Some(user)
    }
}

pub(super) fn decode_success<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status));
    }
    resp.json()
}
