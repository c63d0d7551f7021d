//! Sticky site header with section links, language picker and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that mutates preferences. Both controls call into the
//! shared `Preferences` handle, which persists and applies the change before
//! the page re-renders.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::content::{PROFILE, nav_items};
use crate::i18n::Translations;
use crate::state::context::Preferences;
use crate::state::preferences::{Language, Theme};

/// Site header.
#[component]
pub fn SiteHeader(t: &'static Translations) -> impl IntoView {
    let prefs = expect_context::<Preferences>();

    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/70 dark:bg-slate-900/70 border-b border-slate-200/50 dark:border-slate-800/60">
            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <a href="#home" class="flex items-center gap-2 font-semibold">
                    <span aria-hidden="true">"</>"</span>
                    <span>{PROFILE.name}</span>
                </a>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {nav_items(t)
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=format!("#{}", item.id)
                                    class="hover:text-violet-600 dark:hover:text-violet-400 transition-colors"
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <LanguagePicker label=t.chrome.language_picker/>
                    <button
                        type="button"
                        class="px-3 py-2 rounded-xl border border-slate-300 dark:border-slate-700"
                        on:click=move |_| prefs.toggle_theme()
                        aria-label=t.chrome.toggle_theme
                        title=t.chrome.toggle_theme
                    >
                        {move || theme_icon(prefs.theme())}
                    </button>
                </div>
            </div>
        </header>
    }
}

/// One button per supported language; the active one is pressed.
#[component]
fn LanguagePicker(label: &'static str) -> impl IntoView {
    let prefs = expect_context::<Preferences>();

    view! {
        <div role="group" aria-label=label class="inline-flex rounded-xl border border-slate-300 dark:border-slate-700 overflow-hidden text-xs">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    let active = move || prefs.language() == lang;
                    view! {
                        <button
                            type="button"
                            class=move || picker_class(active())
                            aria-pressed=move || if active() { "true" } else { "false" }
                            lang=lang.code()
                            title=lang.native_name()
                            on:click=move |_| {
                                prefs.set_language(lang);
                            }
                        >
                            {lang.code().to_uppercase()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Icon for the theme button: shows the theme a click switches to.
fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

fn picker_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 bg-violet-600 text-white"
    } else {
        "px-3 py-2 hover:bg-slate-100 dark:hover:bg-slate-800"
    }
}
