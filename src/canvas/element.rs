//! Mark renderer - draws one PlacedMark inside its pool
//!
//! Structure:
//!   outer div (absolute box, entrance class, data-* attributes)
//!     plain: the div itself is the disc
//!     textured: inline SVG with a per-mark noise filter and gradient
//!
//! Each mark exposes its parameters via data-* attributes for DOM queries.

use dioxus::prelude::*;

use crate::pool::PlacedMark;
use crate::primitives::Entrance;

#[component]
pub fn MarkElement(mark: PlacedMark, #[props(default)] entrance: Entrance) -> Element {
    let style = mark.box_style();
    let class = entrance.class();
    let index = mark.sequence_index;
    let color = mark.color.clone();
    let variant = mark.variant.describe();
    let radius = format!("{:.1}", mark.radius_px);
    let x = format!("{:.1}", mark.center.x);
    let y = format!("{:.1}", mark.center.y);
    let description = mark.describe();

    // Clicks on a mark still reach the pool, so stacking marks works
    let onclick = move |e: Event<MouseData>| e.prevent_default();

    match mark.textured_svg() {
        Some(svg) => rsx! {
            div {
                class: "{class}",
                style: "{style}",
                "data-mark-index": "{index}",
                "data-variant": "{variant}",
                "data-color": "{color}",
                "data-radius": "{radius}",
                "data-x": "{x}",
                "data-y": "{y}",
                "data-description": "{description}",
                onclick: onclick,
                dangerous_inner_html: "{svg}",
            }
        },
        None => rsx! {
            div {
                class: "{class}",
                style: "{style}",
                "data-mark-index": "{index}",
                "data-variant": "{variant}",
                "data-color": "{color}",
                "data-radius": "{radius}",
                "data-x": "{x}",
                "data-y": "{y}",
                "data-description": "{description}",
                onclick: onclick,
            }
        },
    }
}
