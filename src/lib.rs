//! protoviz renders step-by-step animations of network protocols.
//!
//! Every built-in protocol is a [`ProtocolDefinition`]: metadata, an ordered list of steps and a
//! declarative [`Scene`]. The public API is split along the path a frame takes:
//!
//! - Look a protocol up in the [`Registry`]
//! - Drive its steps with a [`Sequencer`] on a [`Clock`]
//! - Turn `(scene, step, playing)` into a [`DrawList`] with [`render_frame`]
//! - Serialize the list to SVG or rasterize it to RGBA pixels
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod decor;
pub mod foundation;
pub mod page;
pub mod protocols;
pub mod render;
pub mod scene;
pub mod sequencer;

pub use crate::animation::{
    ease::Ease,
    entity::{AnimatedEntity, EntityShape},
    progress::ProgressMode,
};
pub use crate::config::Config;
pub use crate::decor::{Backdrop, BackdropVariant, Palette, Shell, Theme};
pub use crate::foundation::clock::{Clock, ManualClock, SystemClock};
pub use crate::foundation::core::{Millis, Point, Rect, Rgba8, Surface, Vec2};
pub use crate::foundation::error::{ProtovizError, ProtovizResult};
pub use crate::page::{Route, View, VisualizationPage, resolve};
pub use crate::protocols::{Category, Difficulty, ProtocolDefinition, ProtocolStep, Registry};
pub use crate::render::draw::{DrawList, DrawOp};
pub use crate::render::frame::{
    FrameRenderer, Tooltip, hit_test, hit_test_at, render_frame, render_frame_at,
};
pub use crate::render::raster::{Rasterizer, write_png};
pub use crate::render::svg::to_svg;
pub use crate::render::{FrameBackend, FrameRGBA, SvgBackend};
pub use crate::scene::{dsl::SceneBuilder, model::Scene};
pub use crate::sequencer::{Action, ExportArtifact, Sequencer, SimulationState, Speed};
