//! 結果エリアの表示状態
//!
//! ローディング／結果一覧／メッセージ／エラーのうち常に1つだけを表示する。
//! 状態を1つのenumで持つので、2つ同時に見える状態は作れない。

use crate::render::MatchCard;

/// 実際に表示されるパネル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Results,
    /// Idle（案内文）と Empty（該当なし）はこのパネルを共有し、文言だけが違う
    Message,
    Error,
}

/// 結果一覧とカードごとの開閉状態
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// 取得ごとに変わる番号。カードの識別はこの世代内でのみ有効
    pub generation: u64,
    pub anchor_name: Option<String>,
    cards: Vec<MatchCard>,
    expanded: Vec<bool>,
}

impl ResultsView {
    /// カードが空なら None（空の結果は Empty で表す）
    pub fn new(generation: u64, anchor_name: Option<String>, cards: Vec<MatchCard>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        let expanded = vec![false; cards.len()];
        Some(Self {
            generation,
            anchor_name,
            cards,
            expanded,
        })
    }

    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// 1枚だけ開閉する。範囲外は無視
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// `3 matches for Acme`
    pub fn heading(&self) -> String {
        let count = self.cards.len();
        let noun = if count == 1 { "match" } else { "matches" };
        match self.anchor_name.as_deref() {
            Some(name) if !name.is_empty() => format!("{} {} for {}", count, noun, name),
            _ => format!("{} {}", count, noun),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle(String),
    Loading,
    Results(ResultsView),
    Empty(String),
    Error(String),
}

pub const EMPTY_MESSAGE: &str = "No matches found.";
pub const ERROR_MESSAGE: &str = "Could not load matches. Please try again.";

impl ViewState {
    pub fn panel(&self) -> Panel {
        match self {
            ViewState::Loading => Panel::Loading,
            ViewState::Results(_) => Panel::Results,
            ViewState::Idle(_) | ViewState::Empty(_) => Panel::Message,
            ViewState::Error(_) => Panel::Error,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::Idle(msg) | ViewState::Empty(msg) | ViewState::Error(msg) => Some(msg),
            ViewState::Loading | ViewState::Results(_) => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match self {
            ViewState::Results(view) => Some(view),
            _ => None,
        }
    }

    /// 結果一覧、カードが無ければ Empty
    pub fn from_cards(generation: u64, anchor_name: Option<String>, cards: Vec<MatchCard>) -> Self {
        match ResultsView::new(generation, anchor_name, cards) {
            Some(view) => ViewState::Results(view),
            None => ViewState::Empty(EMPTY_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> MatchCard {
        MatchCard {
            title: title.to_string(),
            badge: "50%".to_string(),
            summary: String::new(),
            explanation_lines: Vec::new(),
            rows: Vec::new(),
            score_line: None,
        }
    }

    #[test]
    fn test_panel_mapping() {
        assert_eq!(ViewState::Idle("pick".into()).panel(), Panel::Message);
        assert_eq!(ViewState::Empty(EMPTY_MESSAGE.into()).panel(), Panel::Message);
        assert_eq!(ViewState::Loading.panel(), Panel::Loading);
        assert_eq!(ViewState::Error(ERROR_MESSAGE.into()).panel(), Panel::Error);
        assert_eq!(
            ViewState::from_cards(1, None, vec![card("A")]).panel(),
            Panel::Results
        );
    }

    #[test]
    fn test_empty_cards_become_empty_state() {
        let state = ViewState::from_cards(1, Some("Acme".into()), Vec::new());
        assert_eq!(state.panel(), Panel::Message);
        assert_eq!(state.message(), Some(EMPTY_MESSAGE));
        assert!(state.results().is_none());
    }

    #[test]
    fn test_idle_and_empty_differ_only_by_text() {
        let idle = ViewState::Idle("Select a brand above, then submit.".into());
        let empty = ViewState::Empty(EMPTY_MESSAGE.into());
        assert_eq!(idle.panel(), empty.panel());
        assert_ne!(idle.message(), empty.message());
    }

    #[test]
    fn test_toggle_is_per_card() {
        let mut view = ResultsView::new(1, None, vec![card("A"), card("B")]).expect("空ではない");
        view.toggle(0);
        assert!(view.is_expanded(0));
        assert!(!view.is_expanded(1));

        view.toggle(0);
        assert!(!view.is_expanded(0));
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut view = ResultsView::new(1, None, vec![card("A")]).expect("空ではない");
        view.toggle(5);
        assert!(!view.is_expanded(0));
        assert!(!view.is_expanded(5));
    }

    #[test]
    fn test_heading() {
        let view = ResultsView::new(1, Some("Acme".into()), vec![card("A"), card("B")]).expect("空ではない");
        assert_eq!(view.heading(), "2 matches for Acme");

        let view = ResultsView::new(1, None, vec![card("A")]).expect("空ではない");
        assert_eq!(view.heading(), "1 match");
    }
}
