//! 内訳スコアの段階分類
//!
//! しきい値判定ではなく完全一致で判定する。0.999 や 0.6 は `Tier::None`。

/// 表示用の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Full,
    Partial,
    None,
}

impl Tier {
    pub fn accent_class(self) -> &'static str {
        match self {
            Tier::Full => "match-full",
            Tier::Partial => "match-partial",
            Tier::None => "match-none",
        }
    }
}

#[allow(clippy::float_cmp)]
pub fn classify(match_factor: f64) -> Tier {
    if match_factor == 1.0 {
        Tier::Full
    } else if match_factor == 0.5 {
        Tier::Partial
    } else {
        Tier::None
    }
}
