//! Rendering primitives shared by the pool and the glow line
//!
//! Each primitive produces CSS or SVG attribute text for the
//! Dioxus components; none of them touch the DOM.

pub mod animation;
pub mod bounded;
pub mod opacity;
pub mod position;

pub use animation::Entrance;
pub use opacity::Opacity;
pub use position::Position;
