//! Pointer-to-local mapping for the pool surface

use crate::primitives::Position;

/// Container bounds in viewport CSS pixels, as reported by layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// The smaller side; fractional radii scale against it
    pub fn scale_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<&web_sys::DomRect> for ContainerRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Where a click landed inside the pool and the size reference for marks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub local: Position,
    pub scale_dimension: f64,
}

/// Translate a viewport click into pool-local coordinates.
///
/// No clamping: the host only delivers clicks that hit the element.
pub fn map_click(pointer_x: f64, pointer_y: f64, rect: ContainerRect) -> Placement {
    Placement {
        local: Position::new(pointer_x - rect.left, pointer_y - rect.top),
        scale_dimension: rect.scale_dimension(),
    }
}
