//! Error taxonomy for the effect core and its DOM glue

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// A candidate list (radii or colors) was empty at selection time
    #[error("invalid configuration: {0} must not be empty")]
    InvalidConfiguration(&'static str),

    /// The surface has no measurable bounds yet (not mounted, zero area)
    #[error("surface bounds unavailable for #{0}")]
    MissingSurfaceBounds(String),
}
