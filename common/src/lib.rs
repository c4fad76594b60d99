//! Sponsorship Match Common Library
//!
//! ブラウザ側(WASM)の画面状態とAPIレコード型。DOMには依存しない。

pub mod types;
pub mod error;
pub mod config;
pub mod classifier;
pub mod render;
pub mod state;
pub mod picker;
pub mod controller;
pub mod health;

pub use types::{
    parse_entities, parse_matches, BreakdownItem, Entity, EntityKind, FeatureKey, MatchList,
    MatchResult,
};
pub use error::{Error, Result};
pub use config::{Flow, PercentFormat, ViewConfig, HEALTH_PATH, HEALTH_POLL_INTERVAL_MS};
pub use classifier::{classify, Tier};
pub use render::{format_percentage, render, BreakdownRow, MatchCard};
pub use state::{Panel, ResultsView, ViewState};
pub use picker::{Options, Picker, SelectOption};
pub use controller::{idle_message, FetchTicket, MatchController};
pub use health::{parse_health, HealthReport, HealthStatus};
