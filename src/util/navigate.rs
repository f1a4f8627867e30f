//! Page navigation capability.
//!
//! Full-page redirects (sign-in, logout) go through `Navigator` so the
//! request helper can be exercised without a `window`.

/// Something that can send the browser to another page.
pub trait Navigator {
    fn redirect(&self, target: &str);
}

/// Assigns `window.location.href`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, target: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
        }
    }
}
