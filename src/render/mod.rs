pub mod draw;
pub mod frame;
pub mod raster;
pub mod svg;

use crate::foundation::error::ProtovizResult;

#[derive(Clone, Debug)]
/// Rasterized frame.
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Output encoding for a finished [`draw::DrawList`].
pub trait FrameBackend {
    type Output;

    fn encode(&mut self, list: &draw::DrawList) -> ProtovizResult<Self::Output>;
}

/// Encodes frames as SVG documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgBackend;

impl FrameBackend for SvgBackend {
    type Output = String;

    fn encode(&mut self, list: &draw::DrawList) -> ProtovizResult<String> {
        svg::to_svg(list)
    }
}

impl FrameBackend for raster::Rasterizer {
    type Output = FrameRGBA;

    fn encode(&mut self, list: &draw::DrawList) -> ProtovizResult<FrameRGBA> {
        self.rasterize(list)
    }
}
