//! プルダウン（選択入力）の状態
//!
//! 一覧の読み込みは1回きり。失敗したらページを再読み込みするまで
//! エラー表示のまま使えない。

use crate::error::Result;
use crate::types::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Options {
    Loading,
    Ready(Vec<Entity>),
    Failed,
}

/// `<option>` 1つ分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, disabled: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    pub kind: EntityKind,
    options: Options,
    selected: Option<i64>,
}

impl Picker {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            options: Options::Loading,
            selected: None,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// 一覧の取得結果を反映する。前回の一覧は丸ごと置き換える
    pub fn load(&mut self, result: Result<Vec<Entity>>) {
        self.selected = None;
        self.options = match result {
            Ok(entities) => Options::Ready(entities),
            Err(_) => Options::Failed,
        };
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.options, Options::Ready(_))
    }

    /// `<select>` の値変更。空文字・不正値・一覧に無いIDは未選択扱い
    pub fn select(&mut self, raw: &str) {
        let id = raw.trim().parse::<i64>().ok();
        self.selected = match (&self.options, id) {
            (Options::Ready(entities), Some(id)) if entities.iter().any(|e| e.id == id) => Some(id),
            _ => None,
        };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// 選択中の値（`<select>` の value 用）
    pub fn selected_value(&self) -> String {
        self.selected.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn select_options(&self) -> Vec<SelectOption> {
        let noun = self.kind.noun();
        let article = self.kind.with_article();
        match &self.options {
            Options::Loading => vec![SelectOption::new("", format!("Loading {}s...", noun), true)],
            Options::Failed => vec![SelectOption::new("", format!("Error loading {}s", noun), true)],
            Options::Ready(entities) => {
                let mut options = Vec::with_capacity(entities.len() + 1);
                options.push(SelectOption::new("", format!("-- Select {} --", article), false));
                options.extend(
                    entities
                        .iter()
                        .map(|e| SelectOption::new(e.id.to_string(), e.label(), false)),
                );
                options
            }
        }
    }
}
