use server::theme::default_config;
use server::{ConfigResolver, PresetCatalog, RequestContext};
use std::fs;
use whitelabel::presets::init_catalog;

#[test]
fn test_installed_catalog_serves_file_presets() {
    let dir = tempfile::tempdir().unwrap();
    let mut acme = default_config();
    acme.brand.name = "Acme Pay".into();
    acme.colors.primary = "#0ea5e9".into();
    fs::write(dir.path().join("acme.toml"), toml::to_string(&acme).unwrap()).unwrap();
    fs::write(dir.path().join("broken.toml"), "not = [valid").unwrap();

    let catalog = init_catalog(Some(dir.path())).unwrap();
    assert!(catalog.contains("acme"));
    assert!(!catalog.contains("broken"));
    assert!(PresetCatalog::global().contains("acme"));

    // A second installation keeps the first catalog
    let again = init_catalog(None).unwrap();
    assert!(again.contains("acme"));

    let resolved = ConfigResolver::global()
        .resolve(&RequestContext::from_query("_hidden_brand_experience=acme&appType=red"));
    assert_eq!(resolved.config, acme);
}
