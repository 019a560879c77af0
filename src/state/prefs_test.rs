use super::*;

// =============================================================
// PreferenceKey
// =============================================================

#[test]
fn keys_map_to_storage_keys() {
    let keys: Vec<_> = PreferenceKey::ALL.iter().map(|k| k.storage_key()).collect();
    assert_eq!(
        keys,
        ["terminal-theme", "neon-intensity", "typewriter-speed", "terminal-primary-color", "terminal-accent-color"]
    );
}

#[test]
fn keys_parse_from_names() {
    for key in PreferenceKey::ALL {
        assert_eq!(key.name().parse::<PreferenceKey>(), Ok(key));
    }
    assert_eq!("theme".parse::<PreferenceKey>(), Err(PreferenceError::UnknownKey("theme".into())));
}

#[test]
fn theme_key_loads_first() {
    assert_eq!(PreferenceKey::ALL[0], PreferenceKey::SelectedTheme);
}

// =============================================================
// Preference::parse
// =============================================================

#[test]
fn parse_theme() {
    assert_eq!(Preference::parse(PreferenceKey::SelectedTheme, "cyber"), Ok(Preference::Theme(ThemeId::Cyber)));
    assert!(Preference::parse(PreferenceKey::SelectedTheme, "plaid").is_err());
}

#[test]
fn parse_intensity_bounds() {
    assert_eq!(Preference::parse(PreferenceKey::NeonIntensity, "0"), Ok(Preference::NeonIntensity(0)));
    assert_eq!(Preference::parse(PreferenceKey::NeonIntensity, "100"), Ok(Preference::NeonIntensity(100)));
    assert_eq!(Preference::parse(PreferenceKey::NeonIntensity, " 42 "), Ok(Preference::NeonIntensity(42)));
    assert_eq!(
        Preference::parse(PreferenceKey::NeonIntensity, "101"),
        Err(PreferenceError::IntensityOutOfRange(101))
    );
    assert_eq!(
        Preference::parse(PreferenceKey::NeonIntensity, "-1"),
        Err(PreferenceError::IntensityOutOfRange(-1))
    );
    assert_eq!(
        Preference::parse(PreferenceKey::NeonIntensity, "50.5"),
        Err(PreferenceError::NotAnInteger("50.5".into()))
    );
}

#[test]
fn parse_speed_must_be_positive() {
    assert_eq!(Preference::parse(PreferenceKey::TypewriterSpeedMs, "1"), Ok(Preference::TypewriterSpeedMs(1)));
    assert_eq!(
        Preference::parse(PreferenceKey::TypewriterSpeedMs, "0"),
        Err(PreferenceError::SpeedNotPositive(0))
    );
    assert_eq!(
        Preference::parse(PreferenceKey::TypewriterSpeedMs, "-20"),
        Err(PreferenceError::SpeedNotPositive(-20))
    );
    assert!(Preference::parse(PreferenceKey::TypewriterSpeedMs, "fast").is_err());
}

#[test]
fn parse_colors() {
    let primary = Preference::parse(PreferenceKey::PrimaryColorOverride, "#123456").unwrap();
    assert_eq!(primary.key(), PreferenceKey::PrimaryColorOverride);
    assert_eq!(primary.stored_value(), "#123456");
    assert!(Preference::parse(PreferenceKey::AccentColorOverride, "teal").is_err());
}

#[test]
fn stored_value_is_canonical() {
    let pref = Preference::parse(PreferenceKey::NeonIntensity, "007").unwrap();
    assert_eq!(pref.stored_value(), "7");
    assert_eq!(Preference::Theme(ThemeId::Neon).stored_value(), "neon");
}

// =============================================================
// PreferenceSet
// =============================================================

#[test]
fn default_set_uses_matrix_and_compiled_defaults() {
    let set = PreferenceSet::default();
    assert_eq!(set.selected_theme, ThemeId::Matrix);
    assert_eq!(set.neon_intensity, 50);
    assert_eq!(set.typewriter_speed_ms, 100);
    assert_eq!(set.primary_color(), "#00FF41");
    assert_eq!(set.secondary_color(), "#00CC33");
    assert_eq!(set.output_speed_ms(), 50);
}

#[test]
fn overrides_win_over_theme_colors() {
    let mut set = PreferenceSet::default();
    set.apply(&Preference::PrimaryColor(Color::parse("#111111").unwrap()));
    set.apply(&Preference::AccentColor(Color::parse("#222222").unwrap()));
    assert_eq!(set.primary_color(), "#111111");
    assert_eq!(set.secondary_color(), "#222222");
}

#[test]
fn selecting_theme_clears_overrides() {
    let mut set = PreferenceSet::default();
    set.apply(&Preference::PrimaryColor(Color::parse("#111111").unwrap()));
    set.apply(&Preference::Theme(ThemeId::Retro));
    assert_eq!(set.primary_color_override, None);
    assert_eq!(set.primary_color(), "#FFB000");
}

#[test]
fn output_speed_never_zero() {
    let mut set = PreferenceSet::default();
    set.apply(&Preference::TypewriterSpeedMs(1));
    assert_eq!(set.output_speed_ms(), 1);
}

#[test]
fn set_serializes_camel_case() {
    let json = serde_json::to_value(PreferenceSet::default()).unwrap();
    assert_eq!(json["selectedTheme"], "matrix");
    assert_eq!(json["neonIntensity"], 50);
    assert_eq!(json["typewriterSpeedMs"], 100);
    assert!(json["primaryColorOverride"].is_null());
}
