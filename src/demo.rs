//! Demo pages for each effect

use dioxus::prelude::*;

use crate::Route;
use crate::canvas::{CirclePool, GlowLine};
use crate::glow::GlowConfig;
use crate::pool::{EffectConfig, MarkVariant};

/// Small radii listed more often so most circles stay small
const DEMO_RADII: &[f64] = &[0.05, 0.05, 0.05, 0.1, 0.1, 0.2, 0.35];

const DEMO_COLORS: &[&str] = &[
    "#f97316",
    "#f97316",
    "#facc15",
    "#22c55e",
    "#3b82f6",
    "rgb(236, 72, 153)",
    "hsl(262, 83%, 58%)",
    "white",
];

fn demo_config() -> EffectConfig {
    EffectConfig::new(
        MarkVariant::Plain,
        DEMO_RADII.iter().copied(),
        DEMO_COLORS.iter().copied(),
    )
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link {
            to: Route::Landing {},
            style: "color: #6b7280; text-decoration: none; font-size: 14px;",
            "\u{2190} Back"
        }
    }
}

/// `circle_type` takes the component's historical prop values: "solid" or "grainy"
#[component]
pub fn PoolDemo(circle_type: String) -> Element {
    let variant = MarkVariant::from_circle_type(&circle_type);
    let config = demo_config().with_variant(variant);
    let (other_type, other_label) = match variant {
        MarkVariant::Plain => ("grainy", "Switch to grainy"),
        MarkVariant::Textured => ("solid", "Switch to solid"),
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
                BackLink {}
                h2 { style: "color: #e5e7eb; margin: 0; font-size: 20px;", "Circle Pool" }
                span { style: "color: #6b7280; font-size: 14px;", "{variant} circles, click to place" }
                Link {
                    to: Route::PoolDemo { circle_type: other_type.to_string() },
                    style: "padding: 8px 20px; background: #3b82f6; color: white; text-decoration: none; border-radius: 6px; font-size: 14px;",
                    "{other_label}"
                }
            }

            // Keyed on the variant so switching starts an empty pool
            div {
                key: "{variant}",
                style: "width: 800px; height: 600px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 8px;",
                CirclePool { config: config }
            }
        }
    }
}

#[component]
pub fn GlowDemo() -> Element {
    let lines = [
        GlowConfig::default(),
        GlowConfig::default()
            .with_main_color("#1e3a5f")
            .with_highlight_color("#06b6d4")
            .with_glow_radius(0.5),
        GlowConfig::default()
            .with_main_color("#4c1d95")
            .with_highlight_color("#f0abfc")
            .with_line_thickness(8.0),
    ];

    rsx! {
        div {
            style: "min-height: 100vh; background: #e5e7eb; display: flex; flex-direction: column; align-items: center; padding: 20px; gap: 32px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center;",
                BackLink {}
                h2 { style: "color: #111827; margin: 0; font-size: 20px;", "Glow Line" }
            }

            for (i, config) in lines.into_iter().enumerate() {
                div {
                    key: "{i}",
                    style: "width: 720px;",
                    GlowLine { config: config }
                }
            }
        }
    }
}
