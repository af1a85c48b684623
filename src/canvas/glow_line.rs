//! GlowLine - a full-width line that lights up under the pointer

use dioxus::prelude::*;

use super::bounds::{surface_id, surface_rect};
use crate::glow::{GlowConfig, GlowTracker};

#[component]
pub fn GlowLine(#[props(default)] config: GlowConfig) -> Element {
    let id = use_hook(|| surface_id("glow-line"));
    let tracker = GlowTracker::new(config);
    let mut fill = use_signal({
        let tracker = tracker.clone();
        move || tracker.on_leave()
    });

    let line_style = tracker.line_style(&fill.read());
    let move_id = id.clone();
    let move_tracker = tracker.clone();
    let leave_tracker = tracker;

    rsx! {
        div {
            id: "{id}",
            style: "width: 100%; margin: 0 auto; padding: 10px 0;",
            onmousemove: move |e: Event<MouseData>| {
                match surface_rect(&move_id) {
                    Ok(rect) => fill.set(move_tracker.on_move(e.client_coordinates().x, rect)),
                    Err(err) => log::debug!("glow move skipped: {err}"),
                }
            },
            onmouseleave: move |_| fill.set(leave_tracker.on_leave()),

            div {
                style: "{line_style}",
            }
        }
    }
}
