//! マッチ結果カード
//!
//! サーバー由来の文字列（名前・説明・内訳説明）はすべてテキストノードとして挿入する。

use leptos::prelude::*;
use sponsor_match_common::{BreakdownRow, MatchCard};

#[component]
pub fn MatchCardView<F>(
    card: MatchCard,
    index: usize,
    expanded: Signal<bool>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let has_details = card.has_details();
    let details_id = format!("match-details-{}", index);
    let toggle_target = details_id.clone();

    view! {
        <div class="match-card" class:expanded=move || expanded.get()>
            <div class="match-header">
                <h3 class="match-name">{card.title.clone()}</h3>
                <span class="match-badge">{card.badge.clone()}</span>
            </div>
            <p class="match-explanation">{card.summary.clone()}</p>

            <button
                class="details-toggle"
                aria-controls=toggle_target
                aria-expanded=move || if expanded.get() { "true" } else { "false" }
                on:click=move |_| on_toggle(index)
            >
                <span class="chevron" class:open=move || expanded.get()>"▸"</span>
                {move || if expanded.get() { " Hide details" } else { " Show details" }}
            </button>

            <div
                id=details_id
                class="match-details"
                class:hidden=move || !expanded.get()
            >
                {card.score_line.clone().map(|line| view! { <p class="match-score">{line}</p> })}
                <ul class="explanation-lines">
                    {card
                        .detail_lines()
                        .iter()
                        .map(|line| view! { <li>{line.clone()}</li> })
                        .collect_view()}
                </ul>
                {(!has_details).then(|| view! { <p class="text-muted">"No further details."</p> })}
                <div class="breakdown">
                    {card.rows.iter().cloned().map(breakdown_row).collect_view()}
                </div>
            </div>
        </div>
    }
}

fn breakdown_row(row: BreakdownRow) -> impl IntoView {
    let class = match row.accent {
        Some(tier) => format!("breakdown-item {}", tier.accent_class()),
        None => "breakdown-item".to_string(),
    };

    view! {
        <div class=class data-feature=row.feature.as_str()>
            <div class="breakdown-header">
                <span class="breakdown-label">{row.label}</span>
                <span class="breakdown-score">{row.score_text}</span>
            </div>
            <p class="breakdown-explanation">{row.explanation}</p>
        </div>
    }
}
