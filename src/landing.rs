use dioxus::prelude::*;

use crate::Route;
use crate::canvas::GlowLine;
use crate::glow::GlowConfig;

#[component]
pub fn Landing() -> Element {
    let divider = GlowConfig::default()
        .with_main_color("#2a2a4a")
        .with_highlight_color("#a5b4fc")
        .with_line_thickness(2.0);

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "text-align: center; max-width: 720px; width: 100%;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Pointer FX"
                }
                GlowLine { config: divider }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 24px 0 40px 0; line-height: 1.6;",
                    "Two small generative effects driven by the pointer: a pool that fills with circles where you click, and a line that glows where you hover."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::PoolDemo { circle_type: "solid".into() },
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #22c55e, #16a34a); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Circle Pool \u{2192}"
                    }
                    Link {
                        to: Route::GlowDemo {},
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Glow Line \u{2192}"
                    }
                }
            }
        }
    }
}
