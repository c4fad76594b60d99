//! バックエンドの死活表示
//!
//! 到達できたか（Live/Offline）とDB接続状態は別々に表示する。
//! Live でもDBが切れていればエラー色になる。

use serde::Deserialize;

use crate::error::Result;

/// `/health` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    pub database: String,
}

impl HealthReport {
    pub fn database_connected(&self) -> bool {
        self.database == "connected"
    }
}

pub fn parse_health(body: &str) -> Result<HealthReport> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// 初回の応答待ち
    Checking,
    Live { database_connected: bool },
    Offline,
}

impl HealthStatus {
    pub fn from_probe(result: Result<HealthReport>) -> Self {
        match result {
            Ok(report) => HealthStatus::Live {
                database_connected: report.database_connected(),
            },
            Err(_) => HealthStatus::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Checking => "Checking...",
            HealthStatus::Live { .. } => "Live",
            HealthStatus::Offline => "Offline",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            HealthStatus::Checking => "status-pending",
            HealthStatus::Live { database_connected: true } => "status-connected",
            HealthStatus::Live { database_connected: false } | HealthStatus::Offline => "status-error",
        }
    }
}
