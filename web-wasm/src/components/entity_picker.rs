//! エンティティ選択（プルダウン + 送信ボタン）

use leptos::prelude::*;
use sponsor_match_common::{EntityKind, MatchController};

#[component]
pub fn EntityPicker<FS, FB>(
    kind: EntityKind,
    controller: ReadSignal<MatchController>,
    on_select: FS,
    on_submit: FB,
) -> impl IntoView
where
    FS: Fn(EntityKind, String) + 'static + Clone + Send + Sync,
    FB: Fn(EntityKind) + 'static + Clone + Send + Sync,
{
    let select_id = format!("{}-select", kind.noun());
    let options = move || {
        controller.with(|c| c.picker(kind).map(|p| p.select_options()).unwrap_or_default())
    };
    let is_enabled = move || controller.with(|c| c.picker(kind).is_some_and(|p| p.is_enabled()));
    let selected_value = move || {
        controller.with(|c| c.picker(kind).map(|p| p.selected_value()).unwrap_or_default())
    };
    let can_submit = move || controller.with(|c| c.can_submit(kind));

    view! {
        <div class="selection-panel">
            <label for=select_id.clone()>{format!("Select {}", kind.with_article())}</label>
            <select
                id=select_id
                prop:disabled=move || !is_enabled()
                prop:value=selected_value
                on:change=move |ev| on_select(kind, event_target_value(&ev))
            >
                {move || {
                    options()
                        .into_iter()
                        .map(|opt| {
                            view! {
                                <option value=opt.value disabled=opt.disabled>
                                    {opt.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <button
                class="btn btn-primary"
                disabled=move || !can_submit()
                on:click=move |_| on_submit(kind)
            >
                {kind.submit_label()}
            </button>
        </div>
    }
}
