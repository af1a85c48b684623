//! Placement - from a click on the pool to a finished mark
//!
//! The mapper converts viewport coordinates into pool-local ones, the
//! selector draws a radius and a color from the configured candidates,
//! and the factory assembles the immutable mark.

pub mod factory;
pub mod mapper;
pub mod sampler;

pub use factory::MarkFactory;
pub use mapper::{ContainerRect, Placement, map_click};
pub use sampler::fresh_rng;
