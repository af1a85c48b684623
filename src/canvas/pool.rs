//! CirclePool - click anywhere to drop a circle
//!
//! Fills its parent with a transparent surface. Each click maps the
//! pointer into the surface, builds a mark and appends it to the pool;
//! the new snapshot re-renders the list.

use dioxus::prelude::*;

use super::bounds::{surface_id, surface_rect};
use super::element::MarkElement;
use crate::placement::{fresh_rng, map_click};
use crate::pool::{EffectConfig, MarkPool};
use crate::primitives::Entrance;

#[component]
pub fn CirclePool(config: EffectConfig, #[props(default)] entrance: Entrance) -> Element {
    let id = use_hook(|| surface_id("circle-pool"));
    let mut pool = use_signal(MarkPool::new);
    let mut rng = use_signal(fresh_rng);

    let marks = pool.read().snapshot();
    let keyframes = Entrance::keyframes_css();
    let click_id = id.clone();

    rsx! {
        style { "{keyframes}" }

        div {
            id: "{id}",
            "data-mark-count": "{marks.len()}",
            style: "position: relative; width: 100%; height: 100%; overflow: hidden; background: transparent;",
            onclick: move |e: Event<MouseData>| {
                let rect = match surface_rect(&click_id) {
                    Ok(rect) => rect,
                    Err(err) => {
                        log::debug!("click skipped: {err}");
                        return;
                    }
                };
                let point = e.client_coordinates();
                let placement = map_click(point.x, point.y, rect);
                let placed = pool.write().place(&mut *rng.write(), &config, placement);
                if let Err(err) = placed {
                    log::error!("circle pool: {err}");
                }
            },

            for mark in marks.iter() {
                MarkElement {
                    key: "{mark.render_key()}",
                    mark: mark.clone(),
                    entrance: entrance,
                }
            }
        }
    }
}
