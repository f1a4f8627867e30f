//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages run the same page-load check so redirect behavior stays
//! identical across routes.

use crate::net::auth_client::browser_client;

/// Run the page-load guard. Returns whether the page may load its data.
///
/// On failure the browser is already on its way to the sign-in page.
pub fn guard_page_load() -> bool {
    match browser_client().require_auth() {
        Ok(_) => true,
        Err(e) => {
            log::info!("page guard: {e}");
            false
        }
    }
}
