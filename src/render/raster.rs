use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::error::{ProtovizError, ProtovizResult},
    render::{FrameRGBA, draw::DrawList, svg::to_svg},
};

const MAX_DIM: u32 = 16_384;

/// SVG rasterizer with a system font database loaded once.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Rasterize a frame into straight-alpha RGBA8.
    #[tracing::instrument(skip(self, list), fields(ops = list.len()))]
    pub fn rasterize(&self, list: &DrawList) -> ProtovizResult<FrameRGBA> {
        let svg = to_svg(list)?;
        self.rasterize_svg(svg.as_bytes())
    }

    pub fn rasterize_svg(&self, bytes: &[u8]) -> ProtovizResult<FrameRGBA> {
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| ProtovizError::render(format!("parse frame svg: {e}")))?;

        let size = tree.size();
        let width = to_px(size.width())?;
        let height = to_px(size.height())?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ProtovizError::render("failed to allocate frame pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.take();
        unpremultiply_in_place(&mut data);
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: false,
        })
    }
}

fn to_px(v: f32) -> ProtovizResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ProtovizError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(ProtovizError::render(format!(
            "frame size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Write a straight-alpha frame as PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> ProtovizResult<()> {
    if frame.premultiplied {
        return Err(ProtovizError::render("png output expects straight alpha"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
