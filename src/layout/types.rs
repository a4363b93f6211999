#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Positioned multi-line text. `first_line_y` is the vertical middle of the first line;
/// every following line sits `line_height` below the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    pub lines: Vec<String>,
    pub x: f32,
    pub first_line_y: f32,
    pub line_height: f32,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRing {
    pub level: usize,
    pub radius: f32,
    pub label: String,
    pub label_pos: (f32, f32),
}

/// One spoke per company.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub company: String,
    pub angle: f32,
    pub end: (f32, f32),
    pub label: LabelBlock,
}

/// One closed outline per category, points in company order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub category: String,
    pub color: String,
    pub fallback_color: bool,
    pub points: Vec<(f32, f32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub category: String,
    pub color: String,
    pub swatch_start: (f32, f32),
    pub swatch_end: (f32, f32),
    pub label: LabelBlock,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendLayout {
    pub title: Option<LabelBlock>,
    pub items: Vec<LegendItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub width: f32,
    pub height: f32,
    pub center: (f32, f32),
    pub max_radius: f32,
    pub rings: Vec<GridRing>,
    pub axes: Vec<AxisLayout>,
    pub series: Vec<SeriesLayout>,
    pub legend: LegendLayout,
}
