use server::decoder::encode_config;
use server::personas::PersonaIcon;
use server::theme::{
    PartialBrand, PartialColors, PartialComponentStyle, PartialComponents, PartialThemeConfig,
    ThemeMode, default_config, to_style_variables,
};
use server::{AppType, BrandSource, ConfigResolver, PresetCatalog, RequestContext};
use std::sync::Arc;

fn resolve(query: &str) -> server::ResolvedContext {
    ConfigResolver::default().resolve(&RequestContext::from_query(query))
}

#[test]
fn test_red_persona_scenario() {
    let resolved = resolve("?appType=red");

    assert_eq!(resolved.config.brand.name.as_str(), "FusionForge Gaming");
    assert_eq!(resolved.config.theme(), ThemeMode::Dark);
    assert_eq!(resolved.app_type, Some(AppType::Red));
    assert_eq!(resolved.persona_icon(), Some(PersonaIcon::Game));
    assert_eq!(resolved.source, BrandSource::Persona(AppType::Red));
}

#[test]
fn test_empty_context_is_platform_default() {
    let resolved = resolve("");

    assert_eq!(resolved.config, default_config());
    assert!(!resolved.is_embedded);
    assert!(!resolved.hide_sidebar);
    assert_eq!(resolved.app_type, None);
    assert_eq!(resolved.source, BrandSource::Default);
}

#[test]
fn test_preset_beats_persona() {
    let catalog = PresetCatalog::builtin();
    let gaming = catalog.lookup("gaming").unwrap().clone();

    let resolved = resolve("_hidden_brand_experience=gaming&appType=blue");

    assert_eq!(resolved.config.brand.name, gaming.brand.name);
    assert_ne!(resolved.config.brand.name.as_str(), "BingGo Parking");
    // appType is still recorded for icon selection
    assert_eq!(resolved.app_type, Some(AppType::Blue));
}

#[test]
fn test_encoded_partial_through_query_string() {
    let patch = PartialThemeConfig {
        colors: Some(PartialColors {
            primary: Some("#ff5500".into()),
            ..Default::default()
        }),
        components: Some(PartialComponents {
            card: Some(PartialComponentStyle {
                padding: Some("2rem".into()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        brand: Some(PartialBrand {
            name: Some("Acme Pay".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let encoded = encode_config(&patch).unwrap();
    let query = format!("_hidden_brand_experience={}&hideSidebar=true", urlencoding::encode(&encoded));

    let resolved = resolve(&query);
    let defaults = default_config();

    assert_eq!(resolved.config.colors.primary.as_str(), "#ff5500");
    assert_eq!(resolved.config.colors.secondary, defaults.colors.secondary);
    assert_eq!(resolved.config.components.card.padding.as_str(), "2rem");
    assert_eq!(
        resolved.config.components.card.border_radius,
        defaults.components.card.border_radius
    );
    assert_eq!(resolved.config.components.button, defaults.components.button);
    assert_eq!(resolved.config.brand.name.as_str(), "Acme Pay");
    assert_eq!(resolved.config.brand.logo, defaults.brand.logo);
    assert_eq!(resolved.config.brand.name, defaults.brand.name);
    assert!(resolved.is_embedded);
    assert!(matches!(resolved.source, BrandSource::CustomEncoded(_)));
}

#[test]
fn test_hostile_payload_never_reaches_style_variables() {
    let payload = r##"{
        "colors": {"primary": "red;} body{display:none", "accent": "#00ff00"},
        "components": {"button": {"padding": "url(javascript:alert(1))"}},
        "brand": {"name": "<script>", "logo": "javascript:alert(1)"}
    }"##;
    let encoded = encode_config(&serde_json::from_str::<serde_json::Value>(payload).unwrap()).unwrap();
    let context = RequestContext {
        brand_experience: Some(encoded),
        ..Default::default()
    };

    let resolved = ConfigResolver::default().resolve(&context);
    let defaults = default_config();

    assert_eq!(resolved.config.colors.primary, defaults.colors.primary);
    assert_eq!(resolved.config.colors.accent.as_str(), "#00ff00");
    assert_eq!(resolved.config.components.button.padding, defaults.components.button.padding);
    assert_eq!(resolved.config.brand.logo, defaults.brand.logo);

    for value in to_style_variables(&resolved.config).values() {
        assert!(!value.contains(';'));
        assert!(!value.contains("javascript:"));
        assert!(!value.contains('<'));
    }
}

#[test]
fn test_missing_required_sections_fall_back_to_defaults() {
    let encoded = encode_config(&serde_json::json!({"colors": {"primary": "#123456"}})).unwrap();
    let resolved = resolve(&format!("_hidden_brand_experience={encoded}&appType=purple"));

    assert_eq!(resolved.config, default_config());
    assert_eq!(resolved.source, BrandSource::Default);
    assert_eq!(resolved.app_type, Some(AppType::Purple));
}

#[test]
fn test_resolution_is_deterministic() {
    let resolver = ConfigResolver::new(Arc::new(PresetCatalog::builtin()));
    let context = RequestContext::from_query("appType=purple&embedMode=true");

    assert_eq!(resolver.resolve(&context), resolver.resolve(&context));
}
