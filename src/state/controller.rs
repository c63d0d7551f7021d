//! Owner of the active `(theme, language)` pair.
//!
//! DESIGN
//! ======
//! Initialization order is fixed: persisted theme (else dark), then persisted
//! language (else the locale resolver on the environment tag). The resolved
//! pair is written through and applied to the document before `init`
//! returns, so callers can render with it on the first pass.
//!
//! Every later transition updates memory first, then writes through and
//! applies document effects exactly once. Store failures are logged by the
//! store and never abort a transition; memory stays authoritative for the
//! session.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::locale::resolve_locale;
use super::preferences::{Language, PreferenceState, StorageKeys, Theme};
use crate::util::dom::DocumentEffects;
use crate::util::storage::PreferenceStore;

pub struct PreferenceController<S, E> {
    store: S,
    effects: E,
    keys: StorageKeys,
    state: PreferenceState,
}

impl<S: PreferenceStore, E: DocumentEffects> PreferenceController<S, E> {
    /// Resolve the initial pair from `store` and `env_locale`, persist it,
    /// and apply it to the document.
    pub fn init(store: S, effects: E, keys: StorageKeys, env_locale: Option<&str>) -> Self {
        let theme = restore::<Theme>(&store, &keys.theme).unwrap_or_default();
        let language = restore::<Language>(&store, &keys.language)
            .unwrap_or_else(|| resolve_locale(env_locale.unwrap_or_default()));
        let state = PreferenceState { theme, language };
        log::debug!("preferences initialized: theme={theme} language={language}");

        let controller = Self { store, effects, keys, state };
        controller.commit();
        controller
    }

    pub fn state(&self) -> PreferenceState {
        self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Flip between dark and light. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.state.theme.toggle();
        self.set_theme(next);
        next
    }

    /// Switch theme. Returns `false` when `theme` was already active.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.state.theme == theme {
            return false;
        }
        self.state.theme = theme;
        self.commit();
        true
    }

    /// Switch language. Returns `false` when `language` was already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.state.language == language {
            return false;
        }
        self.state.language = language;
        self.commit();
        true
    }

    /// Advance to the next supported language. Returns the new language.
    pub fn cycle_language(&mut self) -> Language {
        let next = self.state.language.next();
        self.set_language(next);
        next
    }

    /// Write the current pair through and mirror it onto the document.
    fn commit(&self) {
        self.store.set(&self.keys.theme, self.state.theme.as_str());
        self.store.set(&self.keys.language, self.state.language.code());
        self.apply_side_effects();
    }

    fn apply_side_effects(&self) {
        self.effects.set_dark_class(self.state.theme.is_dark());
        self.effects.set_lang_attribute(self.state.language.code());
    }
}

/// Read and parse a persisted literal; unknown values count as absent.
fn restore<T: std::str::FromStr<Err = super::preferences::ParseError>>(
    store: &impl PreferenceStore,
    key: &str,
) -> Option<T> {
    let raw = store.get(key)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring persisted preference: key={key} error={err}");
            None
        }
    }
}
