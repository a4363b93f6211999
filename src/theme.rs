use serde::{Deserialize, Serialize};

/// Fixed colors for the first categories: gold, dark blue, medium blue, light blue, cyan.
pub const CATEGORY_PALETTE: [&str; 5] = ["#F2B701", "#14286E", "#2F6FD6", "#8FB8F2", "#00D2C8"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub title_font_size: f32,
    pub axis_label_font_size: f32,
    pub text_color: String,
    pub muted_text_color: String,
    pub grid_color: String,
    pub axis_color: String,
    pub background: String,
    pub series_stroke_width: f32,
    pub category_palette: Vec<String>,
}

impl Theme {
    pub fn scorecard() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            font_size: 14.0,
            title_font_size: 18.0,
            axis_label_font_size: 14.0,
            text_color: "#1C2430".to_string(),
            muted_text_color: "#7A8AA6".to_string(),
            grid_color: "#D7E0F0".to_string(),
            axis_color: "#B8C4D8".to_string(),
            background: "#FFFFFF".to_string(),
            series_stroke_width: 2.5,
            category_palette: CATEGORY_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::scorecard()
    }
}
