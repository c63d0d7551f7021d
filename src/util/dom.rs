//! Document-level side effects and environment reads.
//!
//! The `<html>` element carries the only DOM state owned by the preference
//! core: a `dark` class while the dark theme is active (Tailwind's
//! `darkMode: 'class'` hook) and the `lang` attribute. Requires a browser
//! environment; without the `csr` feature every helper is a no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Sink for the document-root mutations driven by preference changes.
///
/// Implementations must be idempotent: applying the same value twice has no
/// additional observable effect.
pub trait DocumentEffects {
    fn set_dark_class(&self, enabled: bool);
    fn set_lang_attribute(&self, code: &str);
}

/// Writes to the live `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomEffects;

#[cfg(feature = "csr")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
}

impl DocumentEffects for DomEffects {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set_dark_class(&self, enabled: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = document_element() {
                if let Err(e) = el.class_list().toggle_with_force(DARK_CLASS, enabled) {
                    log::warn!("failed to toggle .{DARK_CLASS}: {e:?}");
                }
            }
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set_lang_attribute(&self, code: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = document_element() {
                if let Err(e) = el.set_attribute("lang", code) {
                    log::warn!("failed to set lang={code}: {e:?}");
                }
            }
        }
    }
}

/// Locale tag reported by `navigator.language`, if any.
pub fn environment_locale() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Origin of the current page (`https://host:port`), used to absolutize
/// asset paths.
pub fn page_origin() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| match w.location().origin() {
            Ok(origin) => Some(origin),
            Err(e) => {
                log::warn!("location.origin unavailable: {e:?}");
                None
            }
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Full page reload, the recovery path offered by the crash screen.
pub fn reload_page() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("reload failed: {e:?}");
            }
        }
    }
}

/// Calendar year for the footer copyright line.
pub fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_YEAR
    }
}

#[cfg(not(feature = "csr"))]
const FALLBACK_YEAR: u32 = 2025;
