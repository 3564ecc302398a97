#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.class()), Some(theme));
    }
    assert_eq!(Theme::from_stored("sepia"), None);
}

#[test]
fn enabled_messages() {
    assert_eq!(Theme::Dark.enabled_message(), "Dark mode enabled");
    assert_eq!(Theme::Light.enabled_message(), "Light mode enabled");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
}
