use super::*;

#[test]
fn home_backdrops() {
    let dark = Backdrop::select(Theme::DARK, BackdropVariant::Home);
    assert_eq!(dark.image, "images/kingdom-background.png");
    assert_eq!(dark.brightness, 0.7);

    let light = Backdrop::select(Theme::LIGHT, BackdropVariant::Home);
    assert_eq!(light.image, "images/space-background-light.webp");
    assert_eq!(light.brightness, 0.9);
}

#[test]
fn protocol_backdrops() {
    assert_eq!(
        Backdrop::select(Theme::DARK, BackdropVariant::Protocols).image,
        "images/labyrinth-background.png"
    );
    assert_eq!(
        Backdrop::select(Theme::LIGHT, BackdropVariant::Protocols).image,
        "images/plains-background.png"
    );
}
