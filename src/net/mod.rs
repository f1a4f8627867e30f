//! Networking modules for the authenticated HTTP client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the request/response seam and its `gloo-net` backing,
//! `auth_client` layers bearer tokens and 401 handling on top, `api` wraps
//! the backend endpoints, and `types` defines the shared wire schema.

pub mod api;
pub mod auth_client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
