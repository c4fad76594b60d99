//! Sponsorship Match Viewer (Leptos + WASM)

mod app;
pub mod components;
mod api;

use sponsor_match_common::ViewConfig;
use wasm_bindgen::prelude::*;
use leptos::prelude::*;

pub use app::App;

/// `<body data-flow="legacy" data-tier-styling="true">` から表示設定を読む
fn config_from_document() -> ViewConfig {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    ViewConfig::from_attrs(
        attr("data-flow").as_deref(),
        attr("data-tier-styling").as_deref(),
    )
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config_from_document();
    gloo::console::log!(format!(
        "match viewer: {:?} flow, tier styling {}",
        config.flow, config.tier_styling
    ));

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
