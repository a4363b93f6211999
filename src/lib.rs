#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod parser;
#[cfg(feature = "png")]
pub mod raster;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use color::{AssignedColor, ColorEngine, color_for_category};
pub use config::{Config, RadarConfig, RenderConfig, load_config};
pub use error::RenderError;
pub use ir::{DocumentSplit, ScoreTable};
pub use parser::{extract_score_table, parse_cell_number, split_around_table};
#[cfg(feature = "png")]
pub use raster::{RadarImage, rasterize_svg};
pub use render::render_radar_svg;
pub use theme::Theme;

/// Extracts the KPI table from `markdown` and renders it as SVG.
///
/// `None` means the document has no usable table and the chart should be left out.
pub fn render_chart_svg(
    markdown: &str,
    legend_title: Option<&str>,
    config: &Config,
) -> Option<String> {
    let table = extract_score_table(markdown)?;
    let svg = render_radar_svg(&table, legend_title, &config.theme, &config.radar);
    Some(svg)
}

/// Extracts, renders and rasterizes the chart for `markdown`.
///
/// Returns `Ok(None)` when there is no table. Rasterization failures surface once as
/// [`RenderError::Rasterize`] and are not retried.
#[cfg(feature = "png")]
pub fn generate_radar_chart_image(
    markdown: &str,
    legend_title: Option<&str>,
    config: &Config,
) -> Result<Option<RadarImage>, RenderError> {
    let Some(svg) = render_chart_svg(markdown, legend_title, config) else {
        return Ok(None);
    };
    rasterize_svg(&svg, &config.render).map(Some)
}
