use super::*;

#[test]
fn defaults_match_original_storage_namespace() {
    let config = SiteConfig::from_values(None, None).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.base_path, "/");
    let keys = config.storage_keys();
    assert_eq!(keys.theme, "wanil-theme");
    assert_eq!(keys.language, "wanil-lang");
}

#[test]
fn base_path_gains_trailing_slash() {
    let config = SiteConfig::from_values(Some("/portfolio"), None).unwrap();
    assert_eq!(config.base_path, "/portfolio/");
    let config = SiteConfig::from_values(Some(" /portfolio/ "), None).unwrap();
    assert_eq!(config.base_path, "/portfolio/");
}

#[test]
fn relative_base_path_is_rejected() {
    assert_eq!(
        SiteConfig::from_values(Some("portfolio/"), None),
        Err(ConfigError::RelativeBasePath("portfolio/".to_owned()))
    );
    assert!(SiteConfig::from_values(Some(""), None).is_err());
}

#[test]
fn storage_prefix_is_validated() {
    assert!(SiteConfig::from_values(None, Some("")).is_err());
    assert!(SiteConfig::from_values(None, Some("my site")).is_err());
    let config = SiteConfig::from_values(None, Some("folio")).unwrap();
    assert_eq!(config.storage_keys().language, "folio-lang");
}

#[test]
fn asset_path_joins_under_base_path() {
    let config = SiteConfig::from_values(Some("/portfolio"), None).unwrap();
    assert_eq!(config.asset_path("cv/a.pdf"), "/portfolio/cv/a.pdf");
    assert_eq!(config.asset_path("/cv/a.pdf"), "/portfolio/cv/a.pdf");
    assert_eq!(SiteConfig::default().asset_path("cv/a.pdf"), "/cv/a.pdf");
}

#[test]
fn build_env_config_is_valid() {
    let config = SiteConfig::from_build_env();
    assert!(config.base_path.starts_with('/'));
    assert!(config.base_path.ends_with('/'));
    assert!(!config.storage_prefix.is_empty());
}
