use super::*;

#[test]
fn levels_map_to_quarter_steps() {
    assert_eq!(skill_bar_width(Some("Beginner")), "25%");
    assert_eq!(skill_bar_width(Some("Intermediate")), "50%");
    assert_eq!(skill_bar_width(Some("Advanced")), "75%");
    assert_eq!(skill_bar_width(Some("Expert")), "100%");
}

#[test]
fn unknown_or_missing_level_is_empty() {
    assert_eq!(skill_bar_width(Some("expert")), "0%");
    assert_eq!(skill_bar_width(Some("")), "0%");
    assert_eq!(skill_bar_width(None), "0%");
}

#[test]
fn parse_error_names_the_level() {
    assert_eq!("Guru".parse::<SkillLevel>(), Err("unknown skill level: Guru".to_owned()));
}

#[test]
fn fade_shown_overrides_every_animated_property() {
    for (prop, _) in FADE_SHOWN {
        assert!(FADE_HIDDEN.iter().any(|(p, _)| *p == prop), "{prop}");
    }
    assert_eq!(FADE_HIDDEN[0], ("opacity", "0"));
}
