//! SVG → PNG rasterization

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::debug;

use crate::error::{ToolError, ToolResult};

/// Rasterized PNG
#[derive(Debug, Clone)]
pub struct RenderedPng {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render an SVG document to PNG at `scale` times its intrinsic size
pub fn svg_to_png(svg: &[u8], scale: f32) -> ToolResult<RenderedPng> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ToolError::InvalidScale(scale));
    }
    if svg.iter().all(u8::is_ascii_whitespace) {
        return Err(ToolError::EmptyInput);
    }

    let tree = Tree::from_data(svg, &Options::default())
        .map_err(|e| ToolError::InvalidSvg(e.to_string()))?;

    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or(ToolError::InvalidScale(scale))?;

    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ToolError::Render(format!("cannot allocate {}x{}", size.width(), size.height())))?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ToolError::Render(e.to_string()))?;

    debug!(width = size.width(), height = size.height(), bytes = png.len(), "Rendered SVG");

    Ok(RenderedPng {
        png,
        width: size.width(),
        height: size.height(),
    })
}
