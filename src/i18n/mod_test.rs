use std::collections::BTreeSet;

use serde_json::Value;

use super::*;

fn leaf_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                leaf_paths(child, &path, out);
            }
        }
        _ => {
            out.insert(prefix.to_owned());
        }
    }
}

fn paths_for(language: Language) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    leaf_paths(&serde_json::to_value(select(language)).unwrap(), "", &mut out);
    out
}

#[test]
fn every_language_has_the_english_key_set() {
    let english = paths_for(Language::En);
    assert!(english.contains("nav.projects"));
    assert!(english.contains("hero.lead"));
    for language in Language::ALL {
        assert_eq!(paths_for(language), english, "key set mismatch for {language}");
    }
}

#[test]
fn every_leaf_is_a_non_empty_string() {
    for language in Language::ALL {
        for path in paths_for(language) {
            let value = lookup(language, &path);
            assert!(
                value.as_deref().is_some_and(|s| !s.trim().is_empty()),
                "{language}:{path} is empty"
            );
        }
    }
}

#[test]
fn select_returns_the_requested_language() {
    assert_eq!(select(Language::Fr).nav.education, "Études");
    assert_eq!(select(Language::En).nav.education, "Education");
    assert_eq!(select(Language::Ja).nav.education, "学歴");
}

#[test]
fn lookup_resolves_dotted_keys() {
    assert_eq!(lookup(Language::En, "nav.projects").as_deref(), Some("Projects"));
    assert_eq!(lookup(Language::Fr, "cta.view_projects").as_deref(), Some("Voir mes projets"));
    assert_eq!(lookup(Language::Ja, "projects.g6.role").as_deref(), Some("フロントエンド / 実装"));
}

#[test]
fn lookup_misses_unknown_and_non_leaf_keys() {
    assert_eq!(lookup(Language::En, "nav.blog"), None);
    assert_eq!(lookup(Language::En, "nav"), None);
    assert_eq!(lookup(Language::En, ""), None);
    assert_eq!(lookup(Language::En, "nav.projects.extra"), None);
}

#[test]
fn picker_strings_differ_between_languages() {
    let labels: BTreeSet<_> = Language::ALL
        .into_iter()
        .map(|l| select(l).chrome.language_picker)
        .collect();
    assert_eq!(labels.len(), Language::ALL.len());
}
