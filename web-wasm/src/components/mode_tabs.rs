//! モード切替タブ（ブランド起点 ⇄ イベント起点）

use leptos::prelude::*;
use sponsor_match_common::{EntityKind, MatchController};

fn tab_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Event => "Event → Brands",
        EntityKind::Brand => "Brand → Events",
        EntityKind::Sponsor => "Sponsor → Events",
    }
}

#[component]
pub fn ModeTabs<F>(
    controller: ReadSignal<MatchController>,
    on_switch: F,
) -> impl IntoView
where
    F: Fn(EntityKind) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="mode-tabs" role="tablist">
            <For
                each=move || controller.with(|c| c.anchor_kinds())
                key=|kind| *kind
                children=move |kind| {
                    let on_switch = on_switch.clone();
                    let is_active = move || controller.with(|c| c.mode() == kind);
                    view! {
                        <button
                            class="tab"
                            class:active=is_active
                            role="tab"
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| on_switch(kind)
                        >
                            {tab_label(kind)}
                        </button>
                    }
                }
            />
        </div>
    }
}
