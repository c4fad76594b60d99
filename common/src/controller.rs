//! 画面操作のコントローラ
//!
//! 選択・送信・タブ切替・カード開閉を受けて状態を更新する。
//! 通信そのものは呼び出し側が行い、結果を `apply_*` で戻してもらう。
//!
//! マッチ取得には連番のチケットを発行し、最後に発行したチケット以外の
//! レスポンスは捨てる。遅れて返ってきた古いレスポンスで新しい結果を
//! 上書きしないため。

use crate::config::{Flow, ViewConfig};
use crate::error::Result;
use crate::picker::Picker;
use crate::render::render;
use crate::state::{ViewState, ERROR_MESSAGE};
use crate::types::{Entity, EntityKind, MatchList};

/// マッチ取得1回分の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub kind: EntityKind,
    pub id: i64,
}

impl FetchTicket {
    pub fn path(&self) -> String {
        self.kind.matches_path(self.id)
    }
}

/// 未選択時の案内文
pub fn idle_message(kind: EntityKind) -> String {
    format!(
        "Select {} above, then click \"{}\".",
        kind.with_article(),
        kind.submit_label()
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchController {
    config: ViewConfig,
    mode: EntityKind,
    pickers: Vec<Picker>,
    view: ViewState,
    latest_seq: u64,
}

impl MatchController {
    pub fn new(config: ViewConfig) -> Self {
        let kinds = match config.flow {
            Flow::Legacy => vec![EntityKind::Sponsor],
            Flow::Bidirectional => vec![EntityKind::Brand, EntityKind::Event],
        };
        let mode = kinds[0];
        Self {
            config,
            mode,
            pickers: kinds.into_iter().map(Picker::new).collect(),
            view: ViewState::Idle(idle_message(mode)),
            latest_seq: 0,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// このフローで選択の起点にできる種別
    pub fn anchor_kinds(&self) -> Vec<EntityKind> {
        self.pickers.iter().map(|p| p.kind).collect()
    }

    pub fn mode(&self) -> EntityKind {
        self.mode
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn picker(&self, kind: EntityKind) -> Option<&Picker> {
        self.pickers.iter().find(|p| p.kind == kind)
    }

    fn picker_mut(&mut self, kind: EntityKind) -> Option<&mut Picker> {
        self.pickers.iter_mut().find(|p| p.kind == kind)
    }

    /// 一覧取得の結果を反映
    pub fn apply_entities(&mut self, kind: EntityKind, result: Result<Vec<Entity>>) {
        if let Some(picker) = self.picker_mut(kind) {
            picker.load(result);
        }
    }

    pub fn select(&mut self, kind: EntityKind, raw: &str) {
        if let Some(picker) = self.picker_mut(kind) {
            picker.select(raw);
        }
    }

    /// 送信ボタンを押せるか
    pub fn can_submit(&self, kind: EntityKind) -> bool {
        kind == self.mode
            && self
                .picker(kind)
                .map(|p| p.is_enabled() && p.selected().is_some())
                .unwrap_or(false)
    }

    /// 送信。選択が無効なら案内文に戻して None（通信しない）
    pub fn submit(&mut self, kind: EntityKind) -> Option<FetchTicket> {
        let selected = self.picker(kind).and_then(|p| p.selected());
        let id = match selected {
            Some(id) if self.can_submit(kind) => id,
            _ => {
                self.view = ViewState::Idle(idle_message(self.mode));
                return None;
            }
        };

        self.latest_seq += 1;
        self.view = ViewState::Loading;
        Some(FetchTicket {
            seq: self.latest_seq,
            kind,
            id,
        })
    }

    /// マッチ取得の結果を反映。古いチケットなら捨てて false
    pub fn apply_matches(&mut self, ticket: FetchTicket, result: Result<MatchList>) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }

        self.view = match result {
            Ok(list) => {
                let cards = render(&list.matches, &self.config);
                ViewState::from_cards(ticket.seq, list.anchor_name, cards)
            }
            Err(_) => ViewState::Error(ERROR_MESSAGE.to_string()),
        };
        true
    }

    /// タブ切替。両方の選択を解除し、取得中のレスポンスも無効にする
    pub fn switch_mode(&mut self, kind: EntityKind) {
        if self.picker(kind).is_none() {
            return;
        }
        self.latest_seq += 1;
        self.mode = kind;
        for picker in &mut self.pickers {
            picker.clear();
        }
        self.view = ViewState::Idle(idle_message(kind));
    }

    pub fn toggle_card(&mut self, index: usize) {
        if let ViewState::Results(view) = &mut self.view {
            view.toggle(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.view
            .results()
            .map(|view| view.is_expanded(index))
            .unwrap_or(false)
    }
}
