//! Fallback shown by the top-level error boundary.
//!
//! Replaces the whole page rather than leaving it half-rendered. The only
//! action offered is a full reload.

use leptos::error::Errors;
use leptos::prelude::*;

use super::ui::{Button, ButtonVariant};
use crate::state::context::Preferences;
use crate::util::dom;

#[component]
pub fn CrashScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    errors.with_untracked(|errs| {
        for (_, err) in errs.iter() {
            log::error!("render failed: {err}");
        }
    });

    let t = move || prefs.translations();
    let on_reload = Callback::new(|()| dom::reload_page());

    view! {
        <div role="alert" class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md text-center space-y-4">
                <h1 class="text-2xl font-bold">{move || t().chrome.crash_title}</h1>
                <p class="text-sm text-slate-600 dark:text-slate-400">{move || t().chrome.crash_message}</p>
                <Button on_click=on_reload variant=ButtonVariant::Primary>
                    {move || t().chrome.reload}
                </Button>
            </div>
        </div>
    }
}
