//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::crash_screen::CrashScreen;
use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::context::Preferences;

/// Root application component.
///
/// Resolves preferences synchronously before the first render so neither
/// theme nor language flashes a default value.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let prefs = Preferences::provide(&config);
    provide_context(config);

    view! {
        <Title text=move || prefs.translations().chrome.site_title/>
        <ErrorBoundary fallback=|errors| view! { <CrashScreen errors=errors/> }>
            <HomePage/>
        </ErrorBoundary>
    }
}
