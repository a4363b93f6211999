use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas geometry, text heuristics and color thresholds for one radar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    pub width: f32,
    pub height: f32,
    /// Width of the legend column on the left; the chart is centered in the rest.
    pub legend_width: f32,
    pub max_radius: f32,
    pub levels: usize,
    /// Score at the outermost ring. Scores are not auto-scaled.
    pub max_value: f32,
    pub min_color_distance: f32,
    pub max_color_attempts: usize,
    pub min_brightness: f32,
    pub max_brightness: f32,
    /// Axis labels sit at this value along their spoke.
    pub axis_label_value: f32,
    pub axis_label_wrap_chars: usize,
    pub legend_wrap_chars: usize,
    pub legend_max_lines: usize,
    pub line_height: f32,
    pub legend_padding: f32,
    pub legend_swatch_width: f32,
    pub legend_item_gap: f32,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            legend_width: 300.0,
            max_radius: 200.0,
            levels: 5,
            max_value: 5.0,
            min_color_distance: 100.0,
            max_color_attempts: 50,
            min_brightness: 60.0,
            max_brightness: 220.0,
            axis_label_value: 5.8,
            axis_label_wrap_chars: 15,
            legend_wrap_chars: 35,
            legend_max_lines: 2,
            line_height: 16.0,
            legend_padding: 30.0,
            legend_swatch_width: 24.0,
            legend_item_gap: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Family usvg falls back to when a `font-family` in the markup cannot be resolved.
    pub font_family: String,
    pub load_system_fonts: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            load_system_fonts: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub radar: RadarConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    radar: Option<RadarConfigFile>,
    render: Option<RenderConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    title_font_size: Option<f32>,
    axis_label_font_size: Option<f32>,
    text_color: Option<String>,
    muted_text_color: Option<String>,
    grid_color: Option<String>,
    axis_color: Option<String>,
    background: Option<String>,
    series_stroke_width: Option<f32>,
    category_palette: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RadarConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    legend_width: Option<f32>,
    max_radius: Option<f32>,
    levels: Option<usize>,
    max_value: Option<f32>,
    min_color_distance: Option<f32>,
    max_color_attempts: Option<usize>,
    min_brightness: Option<f32>,
    max_brightness: Option<f32>,
    axis_label_value: Option<f32>,
    axis_label_wrap_chars: Option<usize>,
    legend_wrap_chars: Option<usize>,
    legend_max_lines: Option<usize>,
    line_height: Option<f32>,
    legend_padding: Option<f32>,
    legend_swatch_width: Option<f32>,
    legend_item_gap: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    font_family: Option<String>,
    load_system_fonts: Option<bool>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "scorecard" | "default" => config.theme = Theme::scorecard(),
            other => tracing::warn!(theme = other, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        let theme = &mut config.theme;
        if let Some(v) = vars.font_family {
            theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            theme.font_size = v;
        }
        if let Some(v) = vars.title_font_size {
            theme.title_font_size = v;
        }
        if let Some(v) = vars.axis_label_font_size {
            theme.axis_label_font_size = v;
        }
        if let Some(v) = vars.text_color {
            theme.text_color = v;
        }
        if let Some(v) = vars.muted_text_color {
            theme.muted_text_color = v;
        }
        if let Some(v) = vars.grid_color {
            theme.grid_color = v;
        }
        if let Some(v) = vars.axis_color {
            theme.axis_color = v;
        }
        if let Some(v) = vars.background {
            theme.background = v;
        }
        if let Some(v) = vars.series_stroke_width {
            theme.series_stroke_width = v;
        }
        if let Some(v) = vars.category_palette {
            theme.category_palette = v;
        }
    }

    if let Some(radar) = parsed.radar {
        let cfg = &mut config.radar;
        if let Some(v) = radar.width {
            cfg.width = v;
        }
        if let Some(v) = radar.height {
            cfg.height = v;
        }
        if let Some(v) = radar.legend_width {
            cfg.legend_width = v;
        }
        if let Some(v) = radar.max_radius {
            cfg.max_radius = v;
        }
        if let Some(v) = radar.levels {
            cfg.levels = v.max(1);
        }
        if let Some(v) = radar.max_value {
            cfg.max_value = v;
        }
        if let Some(v) = radar.min_color_distance {
            cfg.min_color_distance = v;
        }
        if let Some(v) = radar.max_color_attempts {
            cfg.max_color_attempts = v.max(1);
        }
        if let Some(v) = radar.min_brightness {
            cfg.min_brightness = v;
        }
        if let Some(v) = radar.max_brightness {
            cfg.max_brightness = v;
        }
        if let Some(v) = radar.axis_label_value {
            cfg.axis_label_value = v;
        }
        if let Some(v) = radar.axis_label_wrap_chars {
            cfg.axis_label_wrap_chars = v.max(1);
        }
        if let Some(v) = radar.legend_wrap_chars {
            cfg.legend_wrap_chars = v.max(1);
        }
        if let Some(v) = radar.legend_max_lines {
            cfg.legend_max_lines = v.max(1);
        }
        if let Some(v) = radar.line_height {
            cfg.line_height = v;
        }
        if let Some(v) = radar.legend_padding {
            cfg.legend_padding = v;
        }
        if let Some(v) = radar.legend_swatch_width {
            cfg.legend_swatch_width = v;
        }
        if let Some(v) = radar.legend_item_gap {
            cfg.legend_item_gap = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.font_family {
            config.render.font_family = v;
        }
        if let Some(v) = render.load_system_fonts {
            config.render.load_system_fonts = v;
        }
    }

    Ok(config)
}
