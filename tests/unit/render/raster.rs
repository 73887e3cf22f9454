use super::*;
use crate::{
    foundation::core::{Rect, Rgba8, Surface},
    render::draw::DrawOp,
};

#[test]
fn rasterizes_clear_and_rect() {
    let mut list = DrawList::new(Surface::new(64.0, 32.0));
    list.push(DrawOp::Clear { color: Rgba8::INK });
    list.push(DrawOp::Rect {
        rect: Rect::new(32.0, 0.0, 64.0, 32.0),
        radius: 0.0,
        fill: Some(Rgba8::GREEN),
        stroke: None,
        glow: None,
    });

    let frame = Rasterizer::new().rasterize(&list).unwrap();
    assert_eq!((frame.width, frame.height), (64, 32));
    assert!(!frame.premultiplied);
    assert_eq!(frame.pixel(4, 16), Some([0x0a, 0x0e, 0x27, 255]));
    assert_eq!(frame.pixel(48, 16), Some([0x00, 0xff, 0x88, 255]));
    assert_eq!(frame.pixel(64, 0), None);
}

#[test]
fn empty_surface_fails() {
    let list = DrawList::new(Surface::unmounted());
    assert!(Rasterizer::new().rasterize(&list).is_err());
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 10, 10, 10, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, [128, 64, 0, 128, 0, 0, 0, 0]);
}
