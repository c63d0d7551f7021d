//! Résumé asset manifest: the deployment notes next to the copied assets
//! must name every file the download button can request.

use std::fs;

use folio::net::asset::ResumeAsset;
use folio::state::preferences::Language;

const MANIFEST: &str = "public/cv/README.md";

#[test]
fn manifest_lists_every_language_file() {
    let manifest = fs::read_to_string(MANIFEST).unwrap_or_default();
    assert!(!manifest.is_empty(), "{MANIFEST} missing; run from the crate root");
    for language in Language::ALL {
        let asset = ResumeAsset::for_language(language);
        let file_name = asset.file_name();
        assert!(
            manifest.contains(&format!("`{file_name}`")),
            "{MANIFEST} does not list {file_name} for {language}"
        );
        assert_eq!(asset.relative_path(), format!("cv/{file_name}"));
    }
}

#[test]
fn manifest_lists_no_stale_files() {
    let manifest = fs::read_to_string(MANIFEST).unwrap_or_default();
    let expected: Vec<String> = Language::ALL
        .into_iter()
        .map(|language| ResumeAsset::for_language(language).file_name())
        .collect();
    let listed = manifest
        .split('`')
        .filter(|token| token.ends_with(".pdf"))
        .collect::<Vec<_>>();
    assert_eq!(listed.len(), expected.len(), "listed: {listed:?}");
    for name in listed {
        assert!(expected.iter().any(|e| e == name), "{MANIFEST} lists unknown file {name}");
    }
}
