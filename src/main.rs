mod canvas;
mod demo;
mod error;
mod glow;
mod landing;
mod placement;
mod pool;
mod primitives;

use demo::{GlowDemo, PoolDemo};
use dioxus::prelude::*;
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/pool/:circle_type")]
    PoolDemo { circle_type: String },
    #[route("/glow")]
    GlowDemo {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Expose placed marks to debugger clients
    use_effect(|| {
        document::eval(r#"
            if (!window.getMarks) {
                window.getMarks = function() {
                    return Array.from(document.querySelectorAll('[data-mark-index]')).map(function(el) {
                        return {
                            index: parseInt(el.dataset.markIndex, 10),
                            variant: el.dataset.variant,
                            color: el.dataset.color,
                            radius: parseFloat(el.dataset.radius),
                            x: parseFloat(el.dataset.x),
                            y: parseFloat(el.dataset.y),
                            description: el.dataset.description,
                            rect: el.getBoundingClientRect(),
                        };
                    });
                };
            }
        "#);
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointer-fx starting");
    dioxus::launch(App);
}
