//! Category color assignment.
//!
//! The first categories take the theme's fixed palette. Later categories get colors from a
//! seeded linear congruential generator, so the same index always produces the same color.
//! A generated color is accepted only if its brightness is in range and it keeps
//! `min_color_distance` (Euclidean RGB) from every color assigned before it.

use crate::config::RadarConfig;
use crate::theme::Theme;

/// Seed for generated index `i` is `i * SEED_MULTIPLIER`.
pub const SEED_MULTIPLIER: u32 = 9999;

const LCG_MULTIPLIER: u32 = 9301;
const LCG_INCREMENT: u32 = 49297;
const LCG_MODULUS: u32 = 233280;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `#RGB` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => Some(Self {
                r: u8::from_str_radix(&digits[0..2], 16).ok()?,
                g: u8::from_str_radix(&digits[2..4], 16).ok()?,
                b: u8::from_str_radix(&digits[4..6], 16).ok()?,
            }),
            3 => {
                let channel = |idx: usize| {
                    u8::from_str_radix(&digits[idx..idx + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn brightness(self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }

    pub fn distance(self, other: Rgb) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// The seeded generator behind overflow colors. Yields values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    pub fn for_index(index: usize) -> Self {
        let seed = (index as u64 * SEED_MULTIPLIER as u64) % LCG_MODULUS as u64;
        Self::new(seed as u32)
    }

    pub fn next_f32(&mut self) -> f32 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f32 / LCG_MODULUS as f32
    }

    fn next_channel(&mut self) -> u8 {
        (self.next_f32() * 256.0).floor().min(255.0) as u8
    }

    pub fn next_rgb(&mut self) -> Rgb {
        let r = self.next_channel();
        let g = self.next_channel();
        let b = self.next_channel();
        Rgb::new(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignedColor {
    pub hex: String,
    pub rgb: Option<Rgb>,
    /// Set when no candidate met the distance threshold within the attempt budget.
    pub fallback: bool,
}

/// Per-render color cache. Index `i` is generated against all indices below it, so
/// lookups return the same color regardless of the order they are made in.
#[derive(Debug, Clone)]
pub struct ColorEngine {
    palette: Vec<String>,
    min_distance: f32,
    max_attempts: usize,
    min_brightness: f32,
    max_brightness: f32,
    assigned: Vec<AssignedColor>,
}

impl ColorEngine {
    pub fn new(theme: &Theme, config: &RadarConfig) -> Self {
        Self {
            palette: theme.category_palette.clone(),
            min_distance: config.min_color_distance,
            max_attempts: config.max_color_attempts.max(1),
            min_brightness: config.min_brightness,
            max_brightness: config.max_brightness,
            assigned: Vec::new(),
        }
    }

    pub fn color_for_category(&mut self, index: usize, total_categories: usize) -> String {
        self.assignment(index, total_categories).hex.clone()
    }

    pub fn assignment(&mut self, index: usize, total_categories: usize) -> &AssignedColor {
        let wanted = (index + 1).max(total_categories);
        self.assigned
            .reserve(wanted.saturating_sub(self.assigned.len()));
        while self.assigned.len() <= index {
            let next = self.assign_next();
            self.assigned.push(next);
        }
        &self.assigned[index]
    }

    /// Colors for `0..total`, in index order.
    pub fn assign_all(&mut self, total: usize) -> Vec<AssignedColor> {
        if total == 0 {
            return Vec::new();
        }
        self.assignment(total - 1, total);
        self.assigned[..total].to_vec()
    }

    fn assign_next(&self) -> AssignedColor {
        let index = self.assigned.len();
        if let Some(hex) = self.palette.get(index) {
            let rgb = Rgb::from_hex(hex);
            if rgb.is_none() {
                tracing::warn!(index, color = %hex, "palette color is not #RRGGBB");
            }
            return AssignedColor {
                hex: hex.clone(),
                rgb,
                fallback: false,
            };
        }
        self.generate(index)
    }

    fn generate(&self, index: usize) -> AssignedColor {
        let existing: Vec<Rgb> = self.assigned.iter().filter_map(|c| c.rgb).collect();
        let mut random = SeededRandom::for_index(index);
        let mut best: Option<(Rgb, f32)> = None;
        let mut last = Rgb::new(128, 128, 128);

        for _ in 0..self.max_attempts {
            let candidate = random.next_rgb();
            last = candidate;
            let brightness = candidate.brightness();
            if brightness < self.min_brightness || brightness > self.max_brightness {
                continue;
            }
            let nearest = existing
                .iter()
                .map(|other| candidate.distance(*other))
                .fold(f32::INFINITY, f32::min);
            if nearest >= self.min_distance {
                return AssignedColor {
                    hex: candidate.to_hex(),
                    rgb: Some(candidate),
                    fallback: false,
                };
            }
            if best.is_none_or(|(_, d)| nearest > d) {
                best = Some((candidate, nearest));
            }
        }

        let chosen = best.map(|(rgb, _)| rgb).unwrap_or(last);
        tracing::warn!(
            index,
            color = %chosen.to_hex(),
            attempts = self.max_attempts,
            "no sufficiently distinct color found; using closest candidate"
        );
        AssignedColor {
            hex: chosen.to_hex(),
            rgb: Some(chosen),
            fallback: true,
        }
    }
}

/// Color for one category using the default theme and thresholds.
pub fn color_for_category(index: usize, total_categories: usize) -> String {
    ColorEngine::new(&Theme::default(), &RadarConfig::default())
        .color_for_category(index, total_categories)
}
