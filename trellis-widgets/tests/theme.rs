use trellis_model::TextTone;
use trellis_widgets::theme::{tone_color, DefaultTheme, Rgb, Theme, ThemeRef};

#[test]
fn test_default_theme_resolves_all_names() {
    let theme = DefaultTheme::dark();
    for name in theme.color_names() {
        assert!(theme.resolve(name).is_some(), "missing color: {name}");
    }
}

#[test]
fn test_unknown_name_resolves_none() {
    let theme = DefaultTheme::dark();
    assert_eq!(theme.resolve("chartreuse"), None);
}

#[test]
fn test_light_and_dark_differ() {
    let dark = DefaultTheme::dark();
    let light = DefaultTheme::light();
    assert_ne!(dark.resolve("surface"), light.resolve("surface"));
    assert_ne!(dark.resolve("text"), light.resolve("text"));
}

#[test]
fn test_tone_mapping() {
    let theme = DefaultTheme::dark();
    assert_eq!(tone_color(&theme, TextTone::Default), Some(theme.text));
    assert_eq!(tone_color(&theme, TextTone::Muted), Some(theme.text_muted));
    assert_eq!(tone_color(&theme, TextTone::Positive), Some(theme.positive));
    assert_eq!(tone_color(&theme, TextTone::Negative), Some(theme.negative));
}

#[test]
fn test_hex_construction() {
    assert_eq!(Rgb::hex(0x8AB4F8), Rgb::new(0x8A, 0xB4, 0xF8));
    assert_eq!(Rgb::hex(0x000000), Rgb::new(0, 0, 0));
    assert_eq!(Rgb::hex(0xFFFFFF), Rgb::new(255, 255, 255));
}

#[test]
fn test_theme_usable_as_shared_ref() {
    let theme: ThemeRef = std::sync::Arc::new(DefaultTheme::light());
    assert!(theme.resolve("accent").is_some());
}
