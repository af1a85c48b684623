//! Dioxus components that draw the effects and feed them pointer events

mod bounds;
mod element;
mod glow_line;
mod pool;

pub use glow_line::GlowLine;
pub use pool::CirclePool;
