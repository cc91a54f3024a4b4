use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::{
    foundation::error::{ConvoError, ConvoResult},
    render::frame::FrameRGBA,
};

// Avoid pathological allocations for absurd operand lengths or scales.
const MAX_DIM: u32 = 16_384;

fn shared_fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Parse an SVG document with the system font database.
pub fn parse_svg(svg: &str) -> ConvoResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: shared_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Pixel size of `tree` at `scale`, rounded up to even dimensions.
///
/// Even sizes keep frames valid for yuv420p video without a resize pass.
pub fn raster_size(tree: &usvg::Tree, scale: f64) -> ConvoResult<(u32, u32)> {
    fn to_px(v: f64) -> ConvoResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConvoError::render("svg has invalid width/height"));
        }
        let px = (v.ceil() as u32).max(2);
        Ok(px + px % 2)
    }

    let size = tree.size();
    let w = to_px(f64::from(size.width()) * scale)?;
    let h = to_px(f64::from(size.height()) * scale)?;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(ConvoError::render(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// Rasterize a parsed tree into premultiplied RGBA8.
pub fn rasterize_tree(tree: &usvg::Tree, scale: f64) -> ConvoResult<FrameRGBA> {
    let (width, height) = raster_size(tree, scale)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ConvoError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Parse and rasterize an SVG document.
pub fn rasterize_svg(svg: &str, scale: f64) -> ConvoResult<FrameRGBA> {
    let tree = parse_svg(svg)?;
    rasterize_tree(&tree, scale)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
