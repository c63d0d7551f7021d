#![cfg(not(feature = "csr"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn with_preferences(test: impl FnOnce(Preferences)) {
    Owner::new().with(|| test(Preferences::provide(&SiteConfig::default())));
}

#[test]
fn provide_starts_from_defaults_without_a_browser() {
    with_preferences(|prefs| {
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.language(), Language::En);
        assert!(std::ptr::eq(prefs.translations(), i18n::select(Language::En)));
    });
}

#[test]
fn provide_registers_the_handle_as_context() {
    with_preferences(|prefs| {
        let from_context = expect_context::<Preferences>();
        prefs.toggle_theme();
        assert_eq!(from_context.theme(), Theme::Light);
    });
}

#[test]
fn toggle_theme_updates_the_theme_memo() {
    with_preferences(|prefs| {
        prefs.toggle_theme();
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.language(), Language::En);

        prefs.toggle_theme();
        assert_eq!(prefs.theme(), Theme::Dark);
    });
}

#[test]
fn set_language_switches_the_translation_table() {
    with_preferences(|prefs| {
        assert!(prefs.set_language(Language::Ja));
        assert_eq!(prefs.language(), Language::Ja);
        assert!(std::ptr::eq(prefs.translations(), i18n::select(Language::Ja)));
        assert_eq!(prefs.theme(), Theme::Dark);
    });
}

#[test]
fn reselecting_the_active_language_leaves_the_signal_alone() {
    with_preferences(|prefs| {
        let runs = Arc::new(AtomicUsize::new(0));
        let watcher = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                prefs.state.track();
                runs.fetch_add(1, Ordering::SeqCst)
            }
        });
        watcher.get();
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(!prefs.set_language(Language::En));
        watcher.get();
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(prefs.set_language(Language::Fr));
        watcher.get();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}
