//! PlacedMark - one circle dropped into the pool

use std::fmt;

use crate::primitives::{Opacity, Position};

/// How a mark is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkVariant {
    /// Flat-coloured disc
    #[default]
    Plain,
    /// Radial gradient run through a fractal-noise filter
    Textured,
}

impl MarkVariant {
    /// Accepts the historical `circleType` names. Anything unrecognised is plain.
    pub fn from_circle_type(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grainy" | "textured" => Self::Textured,
            _ => Self::Plain,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Textured => "textured",
        }
    }

    fn key_prefix(&self) -> &'static str {
        match self {
            Self::Plain => "color",
            Self::Textured => "grainy",
        }
    }
}

impl fmt::Display for MarkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Grain filter parameters for textured marks
pub const NOISE_BASE_FREQUENCY: f32 = 1.43;
pub const NOISE_OCTAVES: u32 = 2;

/// Radial gradient stops for textured marks: (offset %, opacity)
pub const GRAIN_STOPS: [(u32, Opacity); 3] = [
    (0, Opacity::FULL),
    (83, Opacity::new(0.74)),
    (100, Opacity::ZERO),
];

/// A mark created by a click. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMark {
    /// Creation order; doubles as the stable identity key
    pub sequence_index: usize,
    /// Click point in container-local pixels
    pub center: Position,
    /// Chosen radius fraction times the pool's scale dimension
    pub radius_px: f64,
    pub color: String,
    pub variant: MarkVariant,
}

impl PlacedMark {
    /// Top-left of the `radius_px` square box centred on the click point.
    ///
    /// `radius_px` sizes the box edge, so the drawn disc's diameter equals
    /// `radius_px`. Layouts built against the old component rely on this.
    pub fn top_left(&self) -> Position {
        let half = self.radius_px / 2.0;
        self.center.translate(-half, -half)
    }

    /// Key for keyed list rendering, unique per pool
    pub fn render_key(&self) -> String {
        format!("{}_{}", self.variant.key_prefix(), self.sequence_index)
    }

    /// Inline style of the outer box
    pub fn box_style(&self) -> String {
        let size = self.radius_px;
        let mut style = format!(
            "position: absolute; {} width: {size}px; height: {size}px;",
            self.top_left().to_css(),
        );
        if self.variant == MarkVariant::Plain {
            style.push_str(&format!(
                " border-radius: 50%; background-color: {}; overflow: hidden;",
                self.color
            ));
        }
        style
    }

    /// SVG markup for a textured mark; `None` for plain marks
    pub fn textured_svg(&self) -> Option<String> {
        if self.variant != MarkVariant::Textured {
            return None;
        }
        let i = self.sequence_index;
        let size = self.radius_px;
        let half = size / 2.0;
        let color = escape_attr(&self.color);
        let stops: String = GRAIN_STOPS
            .iter()
            .map(|(offset, opacity)| {
                format!(
                    r#"<stop offset="{offset}%" stop-color="{color}" stop-opacity="{}"/>"#,
                    opacity.to_attr()
                )
            })
            .collect();

        Some(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" style="display: block;"><defs><filter id="noise-{i}" x="0" y="0" width="100%" height="100%"><feTurbulence type="fractalNoise" baseFrequency="{NOISE_BASE_FREQUENCY}" numOctaves="{NOISE_OCTAVES}" result="NOISE"/><feComposite in="SourceGraphic" in2="NOISE" operator="in" result="COMPOSITE"/></filter><radialGradient id="gradient-{i}">{stops}</radialGradient></defs><circle cx="{half}" cy="{half}" r="{half}" fill="url(#gradient-{i})" filter="url(#noise-{i})"/></svg>"#
        ))
    }

    pub fn describe(&self) -> String {
        format!(
            "{} {} mark #{} ({}px) at {:.0},{:.0}",
            self.variant, self.color, self.sequence_index, self.radius_px, self.center.x, self.center.y
        )
    }
}

/// Colors come from configuration; keep them from breaking out of an attribute.
fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(variant: MarkVariant) -> PlacedMark {
        PlacedMark {
            sequence_index: 3,
            center: Position::new(50.0, 30.0),
            radius_px: 40.0,
            color: "red".into(),
            variant,
        }
    }

    #[test]
    fn variant_from_circle_type() {
        assert_eq!(MarkVariant::from_circle_type("grainy"), MarkVariant::Textured);
        assert_eq!(MarkVariant::from_circle_type("Textured"), MarkVariant::Textured);
        assert_eq!(MarkVariant::from_circle_type("solid"), MarkVariant::Plain);
        assert_eq!(MarkVariant::from_circle_type(""), MarkVariant::Plain);
    }

    #[test]
    fn box_is_centred_on_click_with_radius_as_edge() {
        let m = mark(MarkVariant::Plain);
        assert_eq!(m.top_left(), Position::new(30.0, 10.0));
        let style = m.box_style();
        assert!(style.contains("left: 30px; top: 10px;"));
        assert!(style.contains("width: 40px; height: 40px;"));
        assert!(style.contains("border-radius: 50%"));
        assert!(style.contains("background-color: red"));
    }

    #[test]
    fn textured_box_has_no_fill() {
        let style = mark(MarkVariant::Textured).box_style();
        assert!(!style.contains("background-color"));
    }

    #[test]
    fn render_keys_follow_variant() {
        assert_eq!(mark(MarkVariant::Plain).render_key(), "color_3");
        assert_eq!(mark(MarkVariant::Textured).render_key(), "grainy_3");
    }

    #[test]
    fn plain_mark_has_no_svg() {
        assert!(mark(MarkVariant::Plain).textured_svg().is_none());
    }

    #[test]
    fn textured_svg_is_parameterized_by_index_color_and_size() {
        let svg = mark(MarkVariant::Textured).textured_svg().unwrap_or_default();
        assert!(svg.contains(r#"<filter id="noise-3""#));
        assert!(svg.contains(r#"<radialGradient id="gradient-3">"#));
        assert!(svg.contains(r#"baseFrequency="1.43""#));
        assert!(svg.contains(r#"numOctaves="2""#));
        assert!(svg.contains(r#"<stop offset="83%" stop-color="red" stop-opacity="0.74"/>"#));
        assert!(svg.contains(r#"<circle cx="20" cy="20" r="20""#));
        assert!(svg.contains(r#"filter="url(#noise-3)""#));
    }

    #[test]
    fn textured_svg_escapes_color() {
        let mut m = mark(MarkVariant::Textured);
        m.color = r#"red" onload="x"#.into();
        let svg = m.textured_svg().unwrap_or_default();
        assert!(!svg.contains(r#"red" onload"#));
        assert!(svg.contains("red&quot; onload=&quot;x"));
    }

    #[test]
    fn describe_mentions_variant_and_color() {
        let desc = mark(MarkVariant::Textured).describe();
        assert_eq!(desc, "textured red mark #3 (40px) at 50,30");
    }
}
