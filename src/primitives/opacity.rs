//! Opacity - alpha for gradient stops

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const FULL: Self = Self::new(1.0);
    pub const ZERO: Self = Self::new(0.0);

    /// Attribute form for SVG `stop-opacity`
    pub fn to_attr(&self) -> String {
        format!("{}", self.0)
    }
}
