//! Theme, palette and background selection.
//!
//! Nothing here is global: a [`Shell`] owns the one mutable theme flag and every consumer
//! receives a [`Theme`] (or a [`Palette`] derived from it) by value.

pub mod backdrop;
pub mod theme;

pub use backdrop::{Backdrop, BackdropVariant};
pub use theme::{Palette, Shell, Theme};
