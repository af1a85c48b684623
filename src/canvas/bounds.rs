//! DOM glue - surface ids and bounding rect lookup
//!
//! The core only ever receives a `ContainerRect`. Finding the element and
//! measuring it happens here, on the rendering side.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::FxError;
use crate::placement::ContainerRect;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique element id for one mounted surface
pub fn surface_id(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Current viewport rect of the element with `id`.
///
/// Fails with `MissingSurfaceBounds` while the element is not attached or
/// has no area yet; callers drop the event.
pub fn surface_rect(id: &str) -> Result<ContainerRect, FxError> {
    let missing = || FxError::MissingSurfaceBounds(id.to_string());
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(missing)?;
    let rect = ContainerRect::from(&el.get_bounding_client_rect());
    if !rect.has_area() {
        return Err(missing());
    }
    Ok(rect)
}
