//! Maps a runtime-reported locale tag onto the supported language set.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use super::preferences::Language;

/// Resolve a free-form locale tag (`"fr-CA"`, `"en_US"`, garbage) to a
/// supported language.
///
/// Only the primary subtag before the first `-` is considered, compared
/// case-insensitively. Anything that is not French or Japanese resolves to
/// English.
pub fn resolve_locale(tag: &str) -> Language {
    let lowered = tag.to_lowercase();
    let primary = lowered.split('-').next().unwrap_or_default();
    match primary {
        "fr" => Language::Fr,
        "ja" => Language::Ja,
        _ => Language::En,
    }
}
