//! GlowGradient - the fill of the glow line for one pointer position

use std::fmt;

/// One `(offset, color)` stop of a horizontal linear gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Percent of the line's width. Not clamped; CSS tolerates overflow.
    pub offset_percent: f64,
    pub color: String,
}

impl GradientStop {
    pub fn new(offset_percent: f64, color: impl Into<String>) -> Self {
        Self {
            offset_percent,
            color: color.into(),
        }
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.offset_percent)
    }
}

/// Recomputed on every move and thrown away; it has no identity
#[derive(Debug, Clone, PartialEq)]
pub struct GlowGradient {
    pub main_color: String,
    pub highlight_color: String,
    pub bands: Vec<GradientStop>,
}

impl GlowGradient {
    /// True when every stop is the main color
    pub fn is_solid(&self) -> bool {
        self.bands.iter().all(|s| s.color == self.main_color)
    }

    /// Value for the CSS `background` property
    pub fn to_css(&self) -> String {
        if self.is_solid() {
            return self.main_color.clone();
        }
        let stops: Vec<String> = self.bands.iter().map(ToString::to_string).collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(bands: Vec<GradientStop>) -> GlowGradient {
        GlowGradient {
            main_color: "black".into(),
            highlight_color: "white".into(),
            bands,
        }
    }

    #[test]
    fn stop_css() {
        assert_eq!(GradientStop::new(49.8, "white").to_string(), "white 49.8%");
    }

    #[test]
    fn solid_renders_plain_color() {
        let g = gradient(vec![GradientStop::new(0.0, "black"), GradientStop::new(100.0, "black")]);
        assert!(g.is_solid());
        assert_eq!(g.to_css(), "black");
    }

    #[test]
    fn banded_renders_linear_gradient() {
        let g = gradient(vec![
            GradientStop::new(0.0, "black"),
            GradientStop::new(40.0, "white"),
            GradientStop::new(100.0, "black"),
        ]);
        assert!(!g.is_solid());
        assert_eq!(
            g.to_css(),
            "linear-gradient(to right, black 0%, white 40%, black 100%)"
        );
    }
}
