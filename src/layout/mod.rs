mod legend;
pub mod text;
pub(crate) mod types;
pub use types::*;

use legend::compute_legend_layout;
use text::wrap_words;

use crate::color::AssignedColor;
use crate::config::RadarConfig;
use crate::ir::ScoreTable;
use crate::theme::Theme;
use std::f32::consts::{FRAC_PI_2, PI};

// Below this |cos| an axis label is treated as sitting on the vertical.
const VERTICAL_AXIS_EPSILON: f32 = 0.1;
const RING_LABEL_OFFSET: (f32, f32) = (4.0, -4.0);

/// Angle of spoke `index` out of `count`; index 0 points to 12 o'clock, then clockwise.
pub fn spoke_angle(index: usize, count: usize) -> f32 {
    let count = count.max(1) as f32;
    index as f32 * (2.0 * PI / count) - FRAC_PI_2
}

pub fn polar_point(center: (f32, f32), radius: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (center.0 + radius * cos, center.1 + radius * sin)
}

/// Position of `value` on spoke `index`. Values are clamped to `[0, max_value]`.
pub fn value_point(
    center: (f32, f32),
    max_radius: f32,
    max_value: f32,
    index: usize,
    count: usize,
    value: f32,
) -> (f32, f32) {
    let radius = value_radius(value, max_value, max_radius);
    polar_point(center, radius, spoke_angle(index, count))
}

fn value_radius(value: f32, max_value: f32, max_radius: f32) -> f32 {
    if max_value <= 0.0 {
        return 0.0;
    }
    (value.clamp(0.0, max_value) / max_value) * max_radius
}

pub fn chart_center(config: &RadarConfig) -> (f32, f32) {
    let chart_width = (config.width - config.legend_width).max(0.0);
    let center_x = config.legend_width + chart_width / 2.0;
    (center_x, config.height / 2.0)
}

pub fn compute_radar_layout(
    table: &ScoreTable,
    colors: &[AssignedColor],
    legend_title: Option<&str>,
    theme: &Theme,
    config: &RadarConfig,
) -> RadarLayout {
    let center = chart_center(config);
    let max_radius = config.max_radius;
    let company_count = table.companies.len();
    let levels = config.levels.max(1);

    let rings = (1..=levels)
        .map(|level| {
            let radius = (level as f32 / levels as f32) * max_radius;
            let value = config.max_value * level as f32 / levels as f32;
            GridRing {
                level,
                radius,
                label: format_scale_value(value),
                label_pos: (
                    center.0 + RING_LABEL_OFFSET.0,
                    center.1 - radius + RING_LABEL_OFFSET.1,
                ),
            }
        })
        .collect();

    let label_radius = if config.max_value > 0.0 {
        config.axis_label_value / config.max_value * max_radius
    } else {
        max_radius
    };
    let axes = table
        .companies
        .iter()
        .enumerate()
        .map(|(idx, company)| {
            let angle = spoke_angle(idx, company_count);
            let (label_x, label_y) = polar_point(center, label_radius, angle);
            let lines = wrap_words(company, config.axis_label_wrap_chars);
            let line_height = config.line_height;
            let first_line_y = label_y - (lines.len() as f32 - 1.0) * line_height / 2.0;
            AxisLayout {
                company: company.clone(),
                angle,
                end: polar_point(center, max_radius, angle),
                label: LabelBlock {
                    lines,
                    x: label_x,
                    first_line_y,
                    line_height,
                    anchor: axis_label_anchor(angle),
                },
            }
        })
        .collect();

    let series = table
        .categories
        .iter()
        .enumerate()
        .map(|(cat_idx, category)| {
            let points = (0..company_count)
                .map(|company_idx| {
                    value_point(
                        center,
                        max_radius,
                        config.max_value,
                        company_idx,
                        company_count,
                        table.score(cat_idx, company_idx),
                    )
                })
                .collect();
            let assigned = colors.get(cat_idx);
            SeriesLayout {
                category: category.clone(),
                color: assigned
                    .map(|c| c.hex.clone())
                    .unwrap_or_else(|| theme.text_color.clone()),
                fallback_color: assigned.is_some_and(|c| c.fallback),
                points,
            }
        })
        .collect();

    let legend = compute_legend_layout(table, colors, legend_title, theme, config);

    tracing::debug!(
        axes = company_count,
        series = table.categories.len(),
        "computed radar layout"
    );

    RadarLayout {
        width: config.width,
        height: config.height,
        center,
        max_radius,
        rings,
        axes,
        series,
        legend,
    }
}

fn axis_label_anchor(angle: f32) -> TextAnchor {
    let cos = angle.cos();
    if cos.abs() < VERTICAL_AXIS_EPSILON {
        TextAnchor::Middle
    } else if cos > 0.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    }
}

fn format_scale_value(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if (rounded - rounded.round()).abs() < 0.001 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.2}", rounded).trim_end_matches('0').to_string()
    }
}
