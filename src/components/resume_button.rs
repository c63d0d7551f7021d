//! Résumé download button for the active language.

use leptos::prelude::*;

use super::ui::{Button, ButtonVariant};
use crate::config::SiteConfig;
use crate::state::context::Preferences;
use crate::state::preferences::Language;

#[component]
pub fn ResumeButton(label: &'static str) -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let config = expect_context::<SiteConfig>();

    let on_click = Callback::new(move |()| start_download(&config, prefs.language()));

    view! {
        <Button on_click=on_click variant=ButtonVariant::Outline>
            <span aria-hidden="true" class="mr-2">"⬇"</span>
            {label}
        </Button>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn start_download(config: &SiteConfig, language: Language) {
    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome =
                crate::net::asset::download_resume(&crate::net::asset::BrowserTransport, &config, language).await;
            log::debug!("resume download finished: {outcome:?}");
        });
    }
}
