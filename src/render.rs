use crate::color::ColorEngine;
use crate::config::RadarConfig;
use crate::ir::ScoreTable;
use crate::layout::{LabelBlock, RadarLayout, compute_radar_layout};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Builds the complete radar chart markup for `table`.
///
/// Output depends only on the arguments, so identical input gives byte-identical SVG.
pub fn render_radar_svg(
    table: &ScoreTable,
    legend_title: Option<&str>,
    theme: &Theme,
    config: &RadarConfig,
) -> String {
    let colors = ColorEngine::new(theme, config).assign_all(table.categories.len());
    let layout = compute_radar_layout(table, &colors, legend_title, theme, config);
    render_svg(&layout, theme)
}

pub fn render_svg(layout: &RadarLayout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;
    let (cx, cy) = layout.center;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&theme.background)
    ));

    svg.push_str("<g class=\"grid\">");
    for ring in &layout.rings {
        svg.push_str(&format!(
            "<circle class=\"grid-ring\" cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
            ring.radius,
            escape_xml(&theme.grid_color)
        ));
    }
    for axis in &layout.axes {
        svg.push_str(&format!(
            "<line class=\"axis\" x1=\"{cx:.2}\" y1=\"{cy:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
            axis.end.0,
            axis.end.1,
            escape_xml(&theme.axis_color)
        ));
    }
    let ring_font_size = (theme.font_size * 0.8).round();
    for ring in &layout.rings {
        svg.push_str(&format!(
            "<text class=\"grid-label\" x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            ring.label_pos.0,
            ring.label_pos.1,
            escape_xml(&theme.font_family),
            ring_font_size,
            escape_xml(&theme.muted_text_color),
            escape_xml(&ring.label)
        ));
    }
    svg.push_str("</g>");

    for axis in &layout.axes {
        svg.push_str(&text_block_svg(
            "axis-label",
            &axis.label,
            theme.axis_label_font_size,
            theme,
            false,
        ));
    }

    // Later categories paint over earlier ones.
    for series in &layout.series {
        let fallback = if series.fallback_color {
            " data-fallback=\"true\""
        } else {
            ""
        };
        svg.push_str(&format!(
            "<path class=\"series\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"{fallback}/>",
            points_to_closed_path(&series.points),
            escape_xml(&series.color),
            theme.series_stroke_width
        ));
    }

    svg.push_str("<g class=\"legend\">");
    if let Some(title) = &layout.legend.title {
        svg.push_str(&text_block_svg(
            "legend-title",
            title,
            theme.title_font_size,
            theme,
            true,
        ));
    }
    for item in &layout.legend.items {
        svg.push_str("<g class=\"legend-item\">");
        svg.push_str(&format!(
            "<line class=\"legend-swatch\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            item.swatch_start.0,
            item.swatch_start.1,
            item.swatch_end.0,
            item.swatch_end.1,
            escape_xml(&item.color),
            theme.series_stroke_width + 1.0
        ));
        svg.push_str(&text_block_svg(
            "legend-label",
            &item.label,
            theme.font_size,
            theme,
            false,
        ));
        svg.push_str("</g>");
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

fn points_to_closed_path(points: &[(f32, f32)]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", points[0].0, points[0].1));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.0, point.1));
    }
    d.push_str(" Z");
    d
}

fn text_block_svg(
    class: &str,
    label: &LabelBlock,
    font_size: f32,
    theme: &Theme,
    bold: bool,
) -> String {
    let x = label.x;
    let y = label.first_line_y;
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let mut text = String::new();

    text.push_str(&format!(
        "<text class=\"{class}\" x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{}\" dominant-baseline=\"middle\" font-family=\"{}\" font-size=\"{}\"{weight} fill=\"{}\">",
        label.anchor.as_str(),
        escape_xml(&theme.font_family),
        font_size,
        escape_xml(&theme.text_color)
    ));

    for (idx, line) in label.lines.iter().enumerate() {
        let dy = if idx == 0 { 0.0 } else { label.line_height };
        text.push_str(&format!(
            "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\">{}</tspan>",
            escape_xml(line)
        ));
    }

    text.push_str("</text>");
    text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
