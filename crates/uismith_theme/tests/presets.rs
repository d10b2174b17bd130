use uismith_theme::{check_theme_contrast, FooterBackground, Theme, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["emerald", "paper", "uismith", "zinc"]);
}

#[test]
fn default_preset_is_the_default_theme() {
    assert_eq!(ThemePreset::UiSmith.theme(), Theme::default());
}

#[test]
fn every_preset_passes_contrast_checks() {
    for preset in ThemePreset::all() {
        let issues = check_theme_contrast(&preset.theme().palette());
        assert!(issues.is_empty(), "preset={preset:?} issues={issues:?}");
    }
}

#[test]
fn presets_use_transparent_footer() {
    for preset in ThemePreset::all() {
        assert_eq!(
            preset.theme().footer_background,
            FooterBackground::Transparent,
            "preset={preset:?}"
        );
    }
}

#[test]
fn preset_ids_parse_back() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
    }
    assert_eq!("Paper".parse::<ThemePreset>().unwrap(), ThemePreset::Paper);
    assert!("solarized".parse::<ThemePreset>().is_err());
}
