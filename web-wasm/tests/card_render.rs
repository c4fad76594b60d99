//! カード描画のブラウザテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use sponsor_match_common::{BreakdownRow, FeatureKey, MatchCard, Tier};
use sponsor_match_wasm::components::match_card::MatchCardView;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_card(card: MatchCard) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: web_sys::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let handle = leptos::mount::mount_to(host.clone(), move || {
        view! {
            <MatchCardView
                card=card
                index=0
                expanded=Signal::derive(|| false)
                on_toggle=|_: usize| {}
            />
        }
    });
    std::mem::forget(handle);
    host
}

fn hostile_card() -> MatchCard {
    MatchCard {
        title: "<script>alert(1)</script>".to_string(),
        badge: "83%".to_string(),
        summary: "<img src=x onerror=alert(1)>".to_string(),
        explanation_lines: vec!["<img src=x onerror=alert(1)>".to_string()],
        rows: vec![BreakdownRow {
            feature: FeatureKey::Budget,
            label: "Budget",
            score_text: "5.0 / 10.0 (50% match)".to_string(),
            accent: Some(Tier::Partial),
            explanation: "<b>partial</b> budget fit".to_string(),
        }],
        score_line: None,
    }
}

#[wasm_bindgen_test]
fn test_markup_is_inserted_as_text() {
    let host = mount_card(hostile_card());

    assert!(host.query_selector("script").unwrap().is_none());
    assert!(host.query_selector("img").unwrap().is_none());
    assert!(host.query_selector(".breakdown-explanation b").unwrap().is_none());

    let title = host.query_selector(".match-name").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "<script>alert(1)</script>");
}

#[wasm_bindgen_test]
fn test_collapsed_card_markup() {
    let host = mount_card(hostile_card());

    let toggle = host.query_selector(".details-toggle").unwrap().unwrap();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    let details = host.query_selector(".match-details").unwrap().unwrap();
    assert!(details.class_list().contains("hidden"));

    let row = host.query_selector(".breakdown-item").unwrap().unwrap();
    assert!(row.class_list().contains("match-partial"));
    let score = host.query_selector(".breakdown-score").unwrap().unwrap();
    assert_eq!(score.text_content().unwrap(), "5.0 / 10.0 (50% match)");
}

#[wasm_bindgen_test]
fn test_toggle_present_without_details() {
    let host = mount_card(MatchCard {
        title: "Solo".to_string(),
        badge: "20%".to_string(),
        summary: "Minimal match".to_string(),
        explanation_lines: vec!["Minimal match".to_string()],
        rows: Vec::new(),
        score_line: None,
    });

    assert!(host.query_selector(".details-toggle").unwrap().is_some());
    let details = host.query_selector(".match-details").unwrap().unwrap();
    assert!(!details.text_content().unwrap().contains("Minimal match"));
}

#[wasm_bindgen_test]
fn test_detail_list_skips_summary_line() {
    let host = mount_card(MatchCard {
        title: "TechConf".to_string(),
        badge: "65%".to_string(),
        summary: "Geography: Same city".to_string(),
        explanation_lines: vec![
            "Geography: Same city".to_string(),
            "Budget: Within range".to_string(),
        ],
        rows: Vec::new(),
        score_line: None,
    });

    let items = host.query_selector_all(".explanation-lines li").unwrap();
    assert_eq!(items.length(), 1);
    assert_eq!(
        items.item(0).unwrap().text_content().unwrap(),
        "Budget: Within range"
    );
}
