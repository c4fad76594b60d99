//! バックエンド死活インジケーター
//!
//! マウント時に1回、その後は一定間隔で `/health` を叩く。
//! マッチ取得とは状態を共有せず、ページが開いている間ずっと動き続ける。

use leptos::prelude::*;
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use sponsor_match_common::HealthStatus;
use crate::api;

#[component]
pub fn StatusIndicator(interval_ms: u32) -> impl IntoView {
    let (status, set_status) = signal(HealthStatus::Checking);

    let probe = move || {
        spawn_local(async move {
            let result = api::fetch_health().await;
            set_status.set(HealthStatus::from_probe(result));
        });
    };

    probe();
    Interval::new(interval_ms, probe).forget();

    view! {
        <div class=move || format!("status-indicator {}", status.get().accent_class())>
            <span class="status-dot" />
            <span class="status-text">{move || status.get().label()}</span>
        </div>
    }
}
