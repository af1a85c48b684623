//! Glow Line - a horizontal line with a highlight band under the pointer
//!
//! The band is two narrow ramps around the pointer's relative position.
//! Its width scales with `glow_radius`; everything else stays main color.

pub mod gradient;

pub use gradient::{GlowGradient, GradientStop};

use crate::placement::ContainerRect;

/// Outer ramp half-width, as a fraction of the line width at glow radius 1
const OUTER_SPREAD: f64 = 0.01;
/// Inner (fully highlighted) half-width
const INNER_SPREAD: f64 = 0.002;

/// Appearance of one glow line. Every field has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowConfig {
    pub main_color: String,
    pub highlight_color: String,
    /// Scales the band width; nominally in [0, 1], not enforced
    pub glow_radius: f64,
    pub line_thickness_px: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            main_color: "rgb(0,0,0)".into(),
            highlight_color: "rgb(255,255,255)".into(),
            glow_radius: 1.0,
            line_thickness_px: 4.0,
        }
    }
}

impl GlowConfig {
    pub fn with_main_color(mut self, color: impl Into<String>) -> Self {
        self.main_color = color.into();
        self
    }

    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }

    /// 0 is kept as given and collapses the band to zero width; it does
    /// not fall back to the default radius.
    pub fn with_glow_radius(mut self, glow_radius: f64) -> Self {
        self.glow_radius = glow_radius;
        self
    }

    pub fn with_line_thickness(mut self, px: f64) -> Self {
        self.line_thickness_px = px;
        self
    }
}

/// Computes the line's gradient from the latest pointer event.
///
/// Holds only the config, so calls are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowTracker {
    config: GlowConfig,
}

impl GlowTracker {
    pub fn new(config: GlowConfig) -> Self {
        Self { config }
    }

    /// Gradient for a pointer at viewport x `pointer_x`.
    ///
    /// The relative position is not clamped, so a pointer outside the
    /// rect yields offsets below 0 or above 100.
    pub fn on_move(&self, pointer_x: f64, rect: ContainerRect) -> GlowGradient {
        let p = (pointer_x - rect.left) / rect.width;
        // Used as-is, including 0
        let g = self.config.glow_radius;
        let pct = |v: f64| v.max(0.0) * 100.0;

        let left_start = pct(p - OUTER_SPREAD * g);
        let left_end = pct(p - INNER_SPREAD * g);
        let right_start = pct(p + INNER_SPREAD * g);
        let right_end = pct(p + OUTER_SPREAD * g);

        let main = &self.config.main_color;
        let hl = &self.config.highlight_color;
        self.gradient(vec![
            GradientStop::new(0.0, main),
            GradientStop::new(left_start, main),
            GradientStop::new(left_end, hl),
            GradientStop::new(right_start, hl),
            GradientStop::new(right_end, main),
            GradientStop::new(100.0, main),
        ])
    }

    /// Solid main color, whatever came before
    pub fn on_leave(&self) -> GlowGradient {
        let main = &self.config.main_color;
        self.gradient(
            [0.0, 0.0, 0.0, 100.0, 100.0, 100.0]
                .into_iter()
                .map(|offset| GradientStop::new(offset, main))
                .collect(),
        )
    }

    /// Inline style for the line element
    pub fn line_style(&self, gradient: &GlowGradient) -> String {
        format!(
            "width: 100%; height: {}px; background: {};",
            self.config.line_thickness_px,
            gradient.to_css()
        )
    }

    fn gradient(&self, bands: Vec<GradientStop>) -> GlowGradient {
        GlowGradient {
            main_color: self.config.main_color.clone(),
            highlight_color: self.config.highlight_color.clone(),
            bands,
        }
    }
}
