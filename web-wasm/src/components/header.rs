//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::components::status_indicator::StatusIndicator;

#[component]
pub fn Header(title: &'static str, health_interval_ms: u32) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
            <StatusIndicator interval_ms=health_interval_ms />
        </header>
    }
}
