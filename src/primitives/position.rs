//! Position - a point in container-local pixel space with CSS output
//!
//! Marks are absolutely positioned inside their pool, so every
//! position here is relative to the pool's top-left corner.

/// Point in CSS pixels, relative to the owning container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn to_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_css() {
        let p = Position::new(100.0, 200.0);
        assert_eq!(p.to_css(), "left: 100px; top: 200px;");
    }

    #[test]
    fn position_css_keeps_fractions() {
        let p = Position::new(12.5, -3.25);
        assert_eq!(p.to_css(), "left: 12.5px; top: -3.25px;");
    }

    #[test]
    fn position_translate() {
        let p = Position::new(50.0, 30.0).translate(-20.0, -20.0);
        assert_eq!(p, Position::new(30.0, 10.0));
    }

    #[test]
    fn position_default_is_origin() {
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
    }
}
