//! Reactive handle over the preference controller, provided via context.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::controller::PreferenceController;
use super::preferences::{Language, PreferenceState, Theme};
use crate::config::SiteConfig;
use crate::i18n::{self, Translations};
use crate::util::dom::{self, DomEffects};
use crate::util::storage::BrowserStore;

pub type BrowserController = PreferenceController<BrowserStore, DomEffects>;

/// `Copy` handle shared by every component that reads or changes
/// preferences. The signal mirrors the controller after each transition;
/// per-axis memos keep a theme toggle from re-rendering language-bound
/// views and vice versa.
#[derive(Clone, Copy)]
pub struct Preferences {
    state: RwSignal<PreferenceState>,
    theme: Memo<Theme>,
    language: Memo<Language>,
    controller: StoredValue<BrowserController>,
}

impl Preferences {
    /// Initialize from storage and the browser locale, then provide the
    /// handle as context. Runs synchronously before the first render.
    pub fn provide(config: &SiteConfig) -> Self {
        let locale = dom::environment_locale();
        let controller = PreferenceController::init(BrowserStore, DomEffects, config.storage_keys(), locale.as_deref());
        let state = RwSignal::new(controller.state());
        let handle = Self {
            state,
            theme: Memo::new(move |_| state.get().theme),
            language: Memo::new(move |_| state.get().language),
            controller: StoredValue::new(controller),
        };
        provide_context(handle);
        handle
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Table for the active language; one table per render pass.
    pub fn translations(&self) -> &'static Translations {
        i18n::select(self.language())
    }

    pub fn toggle_theme(&self) {
        self.controller.update_value(|c| {
            c.toggle_theme();
        });
        self.sync();
    }

    /// Select `language`. Returns `false` when it was already active, in
    /// which case the signal is left untouched.
    pub fn set_language(&self, language: Language) -> bool {
        let changed = self
            .controller
            .try_update_value(|c| c.set_language(language))
            .unwrap_or(false);
        if changed {
            self.sync();
        }
        changed
    }

    fn sync(&self) {
        if let Some(next) = self.controller.try_with_value(|c| c.state()) {
            self.state.set(next);
        }
    }
}
