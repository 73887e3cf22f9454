use super::*;

#[test]
fn default_theme_is_dark() {
    assert!(Theme::default().dark);
    assert_eq!(Theme::default().name(), "dark");
}

#[test]
fn toggle_flips_and_round_trips() {
    let t = Theme::DARK;
    assert_eq!(t.toggled(), Theme::LIGHT);
    assert_eq!(t.toggled().toggled(), t);
}

#[test]
fn palettes_differ_per_theme() {
    let dark = Palette::for_theme(Theme::DARK);
    let light = Palette::for_theme(Theme::LIGHT);
    assert_eq!(dark.background, Rgba8::INK);
    assert_eq!(dark.text, Rgba8::WHITE);
    assert_ne!(dark.background, light.background);
    assert_eq!(light.text, Rgba8::INK);
}

#[test]
fn shell_owns_the_single_toggle() {
    let mut shell = Shell::new(Theme::DARK);
    let snapshot = shell.theme();
    assert_eq!(shell.toggle_theme(), Theme::LIGHT);
    // Copies handed out earlier are unaffected.
    assert_eq!(snapshot, Theme::DARK);
    assert_eq!(shell.theme(), Theme::LIGHT);
}
