use podium_theme::{get_theme, keys, project, theme_names, BackgroundKind, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids = theme_names();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "creative",
            "minimal-light",
            "modern-dark",
            "modern-light",
            "professional",
            "vibrant"
        ]
    );
}

#[test]
fn every_preset_projects_the_full_fixed_key_set() {
    for preset in ThemePreset::all() {
        let tokens = project(&preset.theme());
        let emitted: Vec<&str> = tokens.iter().map(|(k, _)| k).collect();
        assert_eq!(
            emitted,
            keys::ALL,
            "Preset {:?} must emit the whole namespace in order",
            preset
        );
        for (key, value) in tokens.iter() {
            assert!(!value.is_empty(), "preset={:?} key={key} must be populated", preset);
        }
    }
}

#[test]
fn presets_have_distinct_backgrounds() {
    for a in ThemePreset::all() {
        for b in ThemePreset::all() {
            if a != b {
                assert_ne!(
                    a.theme().palette.background,
                    b.theme().palette.background,
                    "Presets {:?} and {:?} should have distinct backgrounds",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn solid_backgrounds_reuse_the_palette_background() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        if theme.background.kind == BackgroundKind::Solid {
            assert_eq!(
                theme.background.value, theme.palette.background,
                "preset={:?}",
                preset
            );
        }
    }
}

#[test]
fn unknown_and_absent_names_resolve_to_the_default() {
    let default = ThemePreset::DEFAULT.theme();
    assert_eq!(get_theme("nonexistent-theme"), default);
    assert_eq!(ThemePreset::resolve(None).theme(), default);
    assert_eq!(get_theme("modern-light"), default);
}

#[test]
fn ids_and_display_names_are_stable() {
    assert_eq!(ThemePreset::ModernLight.id(), "modern-light");
    assert_eq!(ThemePreset::MinimalLight.display_name(), "Minimal");
    assert_eq!(ThemePreset::Vibrant.to_string(), "Vibrant");
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::resolve(Some(preset.id())), *preset);
    }
}
