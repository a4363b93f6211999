use crate::color::AssignedColor;
use crate::config::RadarConfig;
use crate::ir::ScoreTable;
use crate::theme::Theme;

use super::text::wrap_and_truncate;
use super::{LabelBlock, LegendItem, LegendLayout, TextAnchor};

const SWATCH_TEXT_GAP: f32 = 8.0;
const TITLE_LINE_SCALE: f32 = 1.25;

pub(super) fn compute_legend_layout(
    table: &ScoreTable,
    colors: &[AssignedColor],
    legend_title: Option<&str>,
    theme: &Theme,
    config: &RadarConfig,
) -> LegendLayout {
    let x = config.legend_padding;
    let mut cursor_y = config.legend_padding;

    let title = legend_title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(|title| {
            let line_height = theme.title_font_size * TITLE_LINE_SCALE;
            let lines = wrap_and_truncate(title, config.legend_wrap_chars, config.legend_max_lines);
            let block = LabelBlock {
                x,
                first_line_y: cursor_y + line_height / 2.0,
                line_height,
                anchor: TextAnchor::Start,
                lines,
            };
            cursor_y += block.lines.len() as f32 * line_height + config.legend_item_gap * 1.5;
            block
        });

    let text_x = x + config.legend_swatch_width + SWATCH_TEXT_GAP;
    let mut items = Vec::with_capacity(table.categories.len());
    for (idx, category) in table.categories.iter().enumerate() {
        let color = colors
            .get(idx)
            .map(|c| c.hex.clone())
            .unwrap_or_else(|| theme.text_color.clone());
        let lines = wrap_and_truncate(category, config.legend_wrap_chars, config.legend_max_lines);
        let first_line_y = cursor_y + config.line_height / 2.0;
        cursor_y += lines.len() as f32 * config.line_height + config.legend_item_gap;
        items.push(LegendItem {
            category: category.clone(),
            color,
            swatch_start: (x, first_line_y),
            swatch_end: (x + config.legend_swatch_width, first_line_y),
            label: LabelBlock {
                lines,
                x: text_x,
                first_line_y,
                line_height: config.line_height,
                anchor: TextAnchor::Start,
            },
        });
    }

    LegendLayout { title, items }
}
