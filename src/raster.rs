use crate::config::RenderConfig;
use crate::error::RenderError;
use std::path::Path;

/// A rendered chart: PNG bytes at the SVG's own pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl RadarImage {
    pub fn write_to(&self, output: &Path) -> Result<(), RenderError> {
        std::fs::write(output, &self.png)?;
        Ok(())
    }
}

/// Rasterizes SVG markup. Markup usvg cannot parse is an error, never an empty image.
pub fn rasterize_svg(svg: &str, render_cfg: &RenderConfig) -> Result<RadarImage, RenderError> {
    let mut opt = usvg::Options::default();
    opt.font_family = render_cfg.font_family.clone();
    if render_cfg.load_system_fonts {
        opt.fontdb_mut().load_system_fonts();
    }

    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|err| RenderError::Rasterize(err.to_string()))?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::Surface { width, height })?;

    let transform = resvg::tiny_skia::Transform::default();
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    let png = pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))?;

    tracing::debug!(width, height, bytes = png.len(), "rasterized chart");
    Ok(RadarImage { width, height, png })
}

pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &RenderConfig,
) -> Result<(), RenderError> {
    rasterize_svg(svg, render_cfg)?.write_to(output)
}
