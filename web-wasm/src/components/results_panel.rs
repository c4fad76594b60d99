//! 結果エリア
//!
//! ローディング／結果一覧／メッセージ／エラーのどれか1つだけを描画する。

use leptos::prelude::*;
use sponsor_match_common::{MatchCard, MatchController, Panel};
use crate::components::match_card::MatchCardView;

#[component]
pub fn ResultsPanel<F>(
    controller: ReadSignal<MatchController>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    // カードの開閉では一覧を作り直さないよう、表示パネルとカード一覧を分けて監視する
    let panel = Memo::new(move |_| controller.with(|c| c.view().panel()));
    let message = Memo::new(move |_| {
        controller.with(|c| c.view().message().map(str::to_string).unwrap_or_default())
    });
    let heading = Memo::new(move |_| {
        controller.with(|c| c.view().results().map(|r| r.heading()).unwrap_or_default())
    });
    let cards = Memo::new(move |_| {
        controller.with(|c| {
            c.view()
                .results()
                .map(|r| {
                    r.cards()
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(i, card)| (r.generation, i, card))
                        .collect::<Vec<(u64, usize, MatchCard)>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <section class="results-area" aria-live="polite">
            {move || match panel.get() {
                Panel::Loading => view! {
                    <div class="loading">
                        <div class="spinner" />
                        <p>"Finding matches..."</p>
                    </div>
                }
                .into_any(),
                Panel::Message => view! {
                    <div class="empty-state">
                        <p>{move || message.get()}</p>
                    </div>
                }
                .into_any(),
                Panel::Error => view! {
                    <div class="error-message">
                        <p>{move || message.get()}</p>
                    </div>
                }
                .into_any(),
                Panel::Results => {
                    let on_toggle = on_toggle.clone();
                    view! {
                        <div class="results">
                            <h2 class="results-heading">{move || heading.get()}</h2>
                            <div class="match-list">
                                <For
                                    each=move || cards.get()
                                    key=|(generation, index, _)| (*generation, *index)
                                    children=move |(_, index, card)| {
                                        let expanded = Signal::derive(move || {
                                            controller.with(|c| c.is_expanded(index))
                                        });
                                        view! {
                                            <MatchCardView
                                                card=card
                                                index=index
                                                expanded=expanded
                                                on_toggle=on_toggle.clone()
                                            />
                                        }
                                    }
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
