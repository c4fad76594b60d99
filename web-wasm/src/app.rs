//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use sponsor_match_common::{EntityKind, Flow, MatchController, ViewConfig};
use crate::api;
use crate::components::{
    header::Header,
    mode_tabs::ModeTabs,
    entity_picker::EntityPicker,
    results_panel::ResultsPanel,
};

/// メインアプリケーションコンポーネント
///
/// 画面状態はすべて1つの `MatchController` に持たせ、シグナル経由で共有する。
#[component]
pub fn App(config: ViewConfig) -> impl IntoView {
    let flow = config.flow;
    let health_interval_ms = config.health_interval_ms;
    let controller = RwSignal::new(MatchController::new(config));

    // 一覧の読み込み（起動時に1回だけ）
    for kind in controller.with_untracked(|c| c.anchor_kinds()) {
        spawn_local(async move {
            let result = api::fetch_entities(kind).await;
            controller.update(|c| c.apply_entities(kind, result));
        });
    }

    // 選択変更ハンドラ
    let on_select = move |kind: EntityKind, value: String| {
        controller.update(|c| c.select(kind, &value));
    };

    // 送信ハンドラ
    let on_submit = move |kind: EntityKind| {
        let mut ticket = None;
        controller.update(|c| ticket = c.submit(kind));
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_matches(ticket).await;
            let mut applied = false;
            controller.update(|c| applied = c.apply_matches(ticket, result));
            if !applied {
                gloo::console::log!(format!("discarded stale response for {}", ticket.path()));
            }
        });
    };

    // タブ切替ハンドラ
    let on_switch = move |kind: EntityKind| {
        controller.update(|c| c.switch_mode(kind));
    };

    // カード開閉ハンドラ
    let on_toggle = move |index: usize| {
        controller.update(|c| c.toggle_card(index));
    };

    let controller = controller.read_only();
    let title = match flow {
        Flow::Legacy => "Sponsor Match Finder",
        Flow::Bidirectional => "Sponsorship Matching",
    };

    view! {
        <div class="container">
            <Header title=title health_interval_ms=health_interval_ms />

            <Show when=move || flow == Flow::Bidirectional>
                <ModeTabs controller=controller on_switch=on_switch />
            </Show>

            <For
                each=move || controller.with(|c| c.anchor_kinds())
                key=|kind| *kind
                children=move |kind| {
                    view! {
                        <Show when=move || controller.with(|c| c.mode() == kind)>
                            <EntityPicker
                                kind=kind
                                controller=controller
                                on_select=on_select
                                on_submit=on_submit
                            />
                        </Show>
                    }
                }
            />

            <ResultsPanel controller=controller on_toggle=on_toggle />
        </div>
    }
}
