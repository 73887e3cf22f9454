use super::*;

#[test]
fn zero_or_non_finite_surfaces_are_not_drawable() {
    assert!(!Surface::unmounted().is_drawable());
    assert!(!Surface::new(800.0, 0.0).is_drawable());
    assert!(!Surface::new(f64::NAN, 400.0).is_drawable());
    assert!(Surface::new(1.0, 1.0).is_drawable());
}

#[test]
fn pixel_size_rounds_up() {
    assert_eq!(Surface::new(799.2, 400.0).pixel_size().unwrap(), (800, 400));
    assert!(Surface::unmounted().pixel_size().is_err());
}

#[test]
fn fraction_maps_onto_surface() {
    let s = Surface::new(800.0, 400.0);
    assert_eq!(s.at_fraction(0.5, 0.25), Point::new(400.0, 100.0));
    assert_eq!(s.center(), Point::new(400.0, 200.0));
}

#[test]
fn hex_parse_accepts_short_long_and_alpha_forms() {
    assert_eq!(Rgba8::parse_hex("#0f8").unwrap(), Rgba8::rgb(0x00, 0xff, 0x88));
    assert_eq!(Rgba8::parse_hex("#00F0FF").unwrap(), Rgba8::CYAN);
    assert_eq!(
        Rgba8::parse_hex("#aa00ff80").unwrap(),
        Rgba8::rgba(0xaa, 0x00, 0xff, 0x80)
    );
    assert!(Rgba8::parse_hex("00f0ff").is_err());
    assert!(Rgba8::parse_hex("#00f0f").is_err());
    assert!(Rgba8::parse_hex("#zz0000").is_err());
}

#[test]
fn hex_output_drops_alpha() {
    assert_eq!(Rgba8::VIOLET.with_opacity(0.3).hex(), "#aa00ff");
}

#[test]
fn opacity_scaling_is_clamped() {
    assert_eq!(Rgba8::WHITE.with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::WHITE.with_opacity(-1.0).a, 0);
    assert_eq!(Rgba8::WHITE.with_opacity(0.5).a, 128);
}

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(u64::MAX).saturating_add(1), Millis(u64::MAX));
    assert_eq!(Millis(5).saturating_sub(Millis(9)), 0);
}
