//! 表示設定
//!
//! 旧フロー（スポンサー → イベント）と新フロー（ブランド ⇄ イベント）の
//! 表示差分をここに集約する。

/// ヘルスチェックのポーリング間隔（ミリ秒）
pub const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;

/// ヘルスチェックのエンドポイント
pub const HEALTH_PATH: &str = "/health";

/// 画面フロー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// スポンサーを選んでイベント候補を見る
    Legacy,
    /// ブランド／イベントをタブで切り替える
    Bidirectional,
}

impl Flow {
    /// `<body data-flow="...">` の値から判定する。未指定は新フロー。
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "legacy" => Flow::Legacy,
            _ => Flow::Bidirectional,
        }
    }
}

/// マッチ率の表示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentFormat {
    /// `82.7%`
    OneDecimal,
    /// `83%`
    Rounded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub flow: Flow,
    pub percent_format: PercentFormat,
    /// 内訳行に Full/Partial/None のアクセントを付けるか
    pub tier_styling: bool,
    pub health_interval_ms: u32,
}

impl ViewConfig {
    pub fn legacy() -> Self {
        Self {
            flow: Flow::Legacy,
            percent_format: PercentFormat::OneDecimal,
            tier_styling: true,
            health_interval_ms: HEALTH_POLL_INTERVAL_MS,
        }
    }

    pub fn bidirectional() -> Self {
        Self {
            flow: Flow::Bidirectional,
            percent_format: PercentFormat::Rounded,
            tier_styling: false,
            health_interval_ms: HEALTH_POLL_INTERVAL_MS,
        }
    }

    pub fn for_flow(flow: Flow) -> Self {
        match flow {
            Flow::Legacy => Self::legacy(),
            Flow::Bidirectional => Self::bidirectional(),
        }
    }

    pub fn with_tier_styling(mut self, enabled: bool) -> Self {
        self.tier_styling = enabled;
        self
    }

    /// ホストページの `data-flow` / `data-tier-styling` 属性から組み立てる
    ///
    /// `data-tier-styling` が未指定・判別不能ならフローの既定値のまま。
    pub fn from_attrs(flow: Option<&str>, tier_styling: Option<&str>) -> Self {
        let config = Self::for_flow(Flow::from_attr(flow));
        match tier_styling.and_then(parse_bool_attr) {
            Some(enabled) => config.with_tier_styling(enabled),
            None => config,
        }
    }
}

fn parse_bool_attr(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::bidirectional()
    }
}
