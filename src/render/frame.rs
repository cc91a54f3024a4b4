use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{ConvoError, ConvoResult},
    },
    stage::palette,
};

/// A rendered stage frame.
#[derive(Clone, Debug)]
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
    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Composite the frame over an opaque `background`, writing RGBA8 with alpha 255 into `out`.
    pub fn flatten_onto(&self, background: Rgba8, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.data.len());
        let bg = [background.r, background.g, background.b];
        for px in self.data.chunks_exact(4) {
            let alpha = px[3];
            let cover = 255 - alpha;
            for (&c, &b) in px[..3].iter().zip(&bg) {
                let fg = if self.premultiplied {
                    u16::from(c)
                } else {
                    scale255(c, alpha)
                };
                out.push((fg + scale255(b, cover)).min(255) as u8);
            }
            out.push(255);
        }
    }

    /// Write the frame as a PNG, creating parent directories.
    pub fn write_png(&self, path: &Path) -> ConvoResult<()> {
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn scale255(v: u8, by: u8) -> u16 {
    (u16::from(v) * u16::from(by) + 127) / 255
}

/// How stage documents are drawn and rasterized.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Raster scale factor applied to the SVG's pixel size.
    pub scale: f64,
    /// Page background, also used to flatten frames for video.
    pub background: Rgba8,
    /// Draw the output bar chart under the stage.
    pub show_chart: bool,
    /// Draw the arithmetic breakdown panel.
    pub show_breakdown: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: palette::PAGE,
            show_chart: true,
            show_breakdown: true,
        }
    }
}

impl RenderSettings {
    /// Reject non-positive or non-finite scales.
    pub fn validate(&self) -> ConvoResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConvoError::validation("render scale must be finite and > 0"));
        }
        if self.scale > 8.0 {
            return Err(ConvoError::validation("render scale must be <= 8"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
