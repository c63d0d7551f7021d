use super::*;

#[test]
fn resolves_french_region_tags_to_french() {
    assert_eq!(resolve_locale("fr-CA"), Language::Fr);
    assert_eq!(resolve_locale("fr-FR"), Language::Fr);
    assert_eq!(resolve_locale("fr"), Language::Fr);
}

#[test]
fn resolves_japanese_to_japanese() {
    assert_eq!(resolve_locale("ja-JP"), Language::Ja);
    assert_eq!(resolve_locale("ja"), Language::Ja);
}

#[test]
fn primary_subtag_match_is_case_insensitive() {
    assert_eq!(resolve_locale("FR"), Language::Fr);
    assert_eq!(resolve_locale("Ja-jp"), Language::Ja);
}

#[test]
fn unsupported_languages_fall_back_to_english() {
    assert_eq!(resolve_locale("de-DE"), Language::En);
    assert_eq!(resolve_locale("en-US"), Language::En);
    assert_eq!(resolve_locale("zh-Hans-CN"), Language::En);
}

#[test]
fn empty_and_malformed_tags_fall_back_to_english() {
    assert_eq!(resolve_locale(""), Language::En);
    assert_eq!(resolve_locale("-"), Language::En);
    assert_eq!(resolve_locale("   "), Language::En);
    // Underscore is not a subtag separator, so the whole tag is the primary.
    assert_eq!(resolve_locale("fr_CA"), Language::En);
    assert_eq!(resolve_locale("français"), Language::En);
}

#[test]
fn every_input_resolves_inside_the_closed_set() {
    let inputs = ["", "x", "fr-", "-fr", "ja-", "en", "FR-ca", "\u{0}", "🙂-JP", "fra"];
    for input in inputs {
        assert!(Language::ALL.contains(&resolve_locale(input)), "input {input:?}");
    }
}
