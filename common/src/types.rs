//! マッチングAPIのレコード型と境界での検証
//!
//! サーバーのJSONはここで型付きレコードに変換し、不正な値は
//! 描画層に届く前に `Error::Malformed` として弾く。
//! - Entity: プルダウン用の一覧（スポンサー／ブランド／イベント）
//! - MatchResult: マッチ結果1件（内訳つき）
//! - MatchList: マッチ結果一覧（アンカー名つき）

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// 選択の起点になるエンティティ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Sponsor,
    Brand,
    Event,
}

impl EntityKind {
    /// 一覧取得のパス
    pub fn list_path(self) -> &'static str {
        match self {
            EntityKind::Sponsor => "/api/sponsors",
            EntityKind::Brand => "/api/brands",
            EntityKind::Event => "/api/events",
        }
    }

    /// マッチ結果取得のパス
    pub fn matches_path(self, id: i64) -> String {
        format!("{}/{}/matches", self.list_path(), id)
    }

    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Sponsor => "sponsor",
            EntityKind::Brand => "brand",
            EntityKind::Event => "event",
        }
    }

    /// `a brand` / `an event`
    pub fn with_article(self) -> &'static str {
        match self {
            EntityKind::Sponsor => "a sponsor",
            EntityKind::Brand => "a brand",
            EntityKind::Event => "an event",
        }
    }

    /// マッチ結果の各行が表す側
    pub fn subject_kind(self) -> EntityKind {
        match self {
            EntityKind::Sponsor | EntityKind::Brand => EntityKind::Event,
            EntityKind::Event => EntityKind::Brand,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self.subject_kind() {
            EntityKind::Brand => "Find Matching Brands",
            _ => "Find Matching Events",
        }
    }
}

/// プルダウンに並べるエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: i64,
    pub name: String,
    pub status: Option<String>,
}

impl Entity {
    /// 表示ラベル。ステータスがあれば `名前 (status)`
    pub fn label(&self) -> String {
        match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() => format!("{} ({})", self.name, status),
            _ => self.name.clone(),
        }
    }
}

/// 内訳の項目キー（表示順で宣言）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    Geography,
    Budget,
    SponsorshipType,
    EventType,
    Footfall,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 5] = [
        FeatureKey::Geography,
        FeatureKey::Budget,
        FeatureKey::SponsorshipType,
        FeatureKey::EventType,
        FeatureKey::Footfall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::Geography => "geography",
            FeatureKey::Budget => "budget",
            FeatureKey::SponsorshipType => "sponsorship_type",
            FeatureKey::EventType => "event_type",
            FeatureKey::Footfall => "footfall",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureKey::Geography => "Geography",
            FeatureKey::Budget => "Budget",
            FeatureKey::SponsorshipType => "Sponsorship Type",
            FeatureKey::EventType => "Event Type",
            FeatureKey::Footfall => "Footfall",
        }
    }
}

/// 内訳1項目
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownItem {
    pub match_factor: f64,
    pub contribution: f64,
    pub weight: f64,
    pub explanation: String,
}

/// マッチ結果1件
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub subject_name: String,
    pub match_percentage: f64,
    pub explanation: String,
    pub breakdown: BTreeMap<FeatureKey, BreakdownItem>,
    pub total_score: Option<f64>,
    pub max_score: Option<f64>,
}

/// マッチ結果一覧（サーバーの並び順を保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchList {
    pub anchor_name: Option<String>,
    pub matches: Vec<MatchResult>,
}

// ============================================
// ワイヤー形式
// ============================================

#[derive(Deserialize)]
struct SponsorRecord {
    id: i64,
    sponsor_name: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct BrandRecord {
    id: i64,
    #[serde(alias = "sponsor_name")]
    brand_name: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct EventRecord {
    id: i64,
    event_name: String,
}

#[derive(Deserialize)]
struct SponsorsResponse {
    sponsors: Vec<SponsorRecord>,
}

#[derive(Deserialize)]
struct BrandsResponse {
    // 旧サーバーは /api/brands でも "sponsors" キーを返していた
    #[serde(alias = "sponsors")]
    brands: Vec<BrandRecord>,
}

#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<EventRecord>,
}

#[derive(Deserialize)]
struct BreakdownRecord {
    match_factor: f64,
    contribution: f64,
    weight: f64,
    #[serde(default)]
    explanation: Option<String>,
}

#[derive(Deserialize)]
struct MatchRecord {
    #[serde(default)]
    event_name: Option<String>,
    #[serde(default)]
    brand_name: Option<String>,
    match_percentage: f64,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    breakdown: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    total_score: Option<f64>,
    #[serde(default)]
    max_score: Option<f64>,
}

#[derive(Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    sponsor_name: Option<String>,
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    event_name: Option<String>,
    matches: Vec<MatchRecord>,
}

// ============================================
// パース
// ============================================

/// 一覧レスポンスをパース
pub fn parse_entities(kind: EntityKind, body: &str) -> Result<Vec<Entity>> {
    let entities = match kind {
        EntityKind::Sponsor => serde_json::from_str::<SponsorsResponse>(body)?
            .sponsors
            .into_iter()
            .map(|r| Entity { id: r.id, name: r.sponsor_name, status: r.status })
            .collect(),
        EntityKind::Brand => serde_json::from_str::<BrandsResponse>(body)?
            .brands
            .into_iter()
            .map(|r| Entity { id: r.id, name: r.brand_name, status: r.status })
            .collect(),
        EntityKind::Event => serde_json::from_str::<EventsResponse>(body)?
            .events
            .into_iter()
            .map(|r| Entity { id: r.id, name: r.event_name, status: None })
            .collect(),
    };
    Ok(entities)
}

/// マッチ結果レスポンスをパース
///
/// `anchor` は選択した側の種別。各行の名前は反対側のフィールド
/// （スポンサー／ブランド起点なら `event_name`、イベント起点なら `brand_name`）から取る。
pub fn parse_matches(anchor: EntityKind, body: &str) -> Result<MatchList> {
    let response: MatchesResponse = serde_json::from_str(body)?;

    let anchor_name = match anchor {
        EntityKind::Sponsor => response.sponsor_name.or(response.brand_name),
        EntityKind::Brand => response.brand_name,
        EntityKind::Event => response.event_name,
    };

    let matches = response
        .matches
        .into_iter()
        .enumerate()
        .map(|(i, record)| convert_match(anchor.subject_kind(), i, record))
        .collect::<Result<Vec<_>>>()?;

    Ok(MatchList { anchor_name, matches })
}

fn convert_match(subject: EntityKind, index: usize, record: MatchRecord) -> Result<MatchResult> {
    let name = match subject {
        EntityKind::Brand => record.brand_name,
        _ => record.event_name,
    };
    let subject_name = name.ok_or_else(|| {
        Error::Malformed(format!("match #{}: missing {}_name", index, subject.noun()))
    })?;

    if !record.match_percentage.is_finite() || !(0.0..=100.0).contains(&record.match_percentage) {
        return Err(Error::Malformed(format!(
            "match #{}: match_percentage {} out of range",
            index, record.match_percentage
        )));
    }

    let mut breakdown = BTreeMap::new();
    if let Some(map) = record.breakdown {
        for key in FeatureKey::ALL {
            let Some(value) = map.get(key.as_str()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let item: BreakdownRecord = serde_json::from_value(value.clone())?;
            if ![item.match_factor, item.contribution, item.weight]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(Error::Malformed(format!(
                    "match #{}: non-finite value in breakdown.{}",
                    index,
                    key.as_str()
                )));
            }
            breakdown.insert(
                key,
                BreakdownItem {
                    match_factor: item.match_factor,
                    contribution: item.contribution,
                    weight: item.weight,
                    explanation: item.explanation.unwrap_or_default(),
                },
            );
        }
    }

    Ok(MatchResult {
        subject_name,
        match_percentage: record.match_percentage,
        explanation: record.explanation.unwrap_or_default(),
        breakdown,
        total_score: record.total_score.filter(|v| v.is_finite()),
        max_score: record.max_score.filter(|v| v.is_finite()),
    })
}
