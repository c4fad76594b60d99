//! マッチ結果 → カード表示モデル
//!
//! ここで作るのは文字列とクラス名だけ。DOMへの挿入はテキストノードとして
//! 行うので、サーバー由来の文字列をマークアップとして解釈することはない。

use crate::classifier::{classify, Tier};
use crate::config::{PercentFormat, ViewConfig};
use crate::types::{FeatureKey, MatchResult};

/// 内訳1行
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub feature: FeatureKey,
    pub label: &'static str,
    /// `5.0 / 10.0 (50% match)`
    pub score_text: String,
    /// 段階アクセント。tier_styling が無効なら None
    pub accent: Option<Tier>,
    pub explanation: String,
}

/// カード1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub title: String,
    pub badge: String,
    pub summary: String,
    pub explanation_lines: Vec<String>,
    pub rows: Vec<BreakdownRow>,
    pub score_line: Option<String>,
}

impl MatchCard {
    /// 詳細パネル用の説明行（`summary` に出した1行目は除く）
    pub fn detail_lines(&self) -> &[String] {
        self.explanation_lines.get(1..).unwrap_or(&[])
    }

    pub fn has_details(&self) -> bool {
        !self.rows.is_empty() || !self.detail_lines().is_empty() || self.score_line.is_some()
    }
}

/// 小数1桁。ブラウザの `toFixed(1)` と同じく、2進数の正確な値で丸める
///
/// 正確な値がちょうど .x5 になるのは `value * 4` が奇数のとき（0.25, 12.75 など）だけで、
/// このときだけ `toFixed` に合わせて絶対値の大きい側へ丸める。
pub fn fixed1(value: f64) -> String {
    let quarters = value * 4.0;
    let is_exact_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_exact_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// マッチ率バッジの文字列
pub fn format_percentage(value: f64, format: PercentFormat) -> String {
    match format {
        PercentFormat::OneDecimal => format!("{}%", fixed1(value)),
        PercentFormat::Rounded => format!("{}%", value.round() as i64),
    }
}

fn score_text(contribution: f64, weight: f64, match_factor: f64) -> String {
    format!(
        "{} / {} ({}% match)",
        fixed1(contribution),
        fixed1(weight),
        (match_factor * 100.0).round() as i64
    )
}

fn render_card(result: &MatchResult, config: &ViewConfig) -> MatchCard {
    let explanation_lines: Vec<String> = result
        .explanation
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let rows = FeatureKey::ALL
        .iter()
        .filter_map(|key| result.breakdown.get(key).map(|item| (*key, item)))
        .map(|(feature, item)| BreakdownRow {
            feature,
            label: feature.label(),
            score_text: score_text(item.contribution, item.weight, item.match_factor),
            accent: config.tier_styling.then(|| classify(item.match_factor)),
            explanation: item.explanation.clone(),
        })
        .collect();

    let score_line = match (result.total_score, result.max_score) {
        (Some(total), Some(max)) => Some(format!("{} / {} pts", fixed1(total), fixed1(max))),
        _ => None,
    };

    MatchCard {
        title: result.subject_name.clone(),
        badge: format_percentage(result.match_percentage, config.percent_format),
        summary: explanation_lines.first().cloned().unwrap_or_default(),
        explanation_lines,
        rows,
        score_line,
    }
}

/// 入力順のままカードに変換する（並べ替えない）
pub fn render(matches: &[MatchResult], config: &ViewConfig) -> Vec<MatchCard> {
    matches.iter().map(|m| render_card(m, config)).collect()
}
