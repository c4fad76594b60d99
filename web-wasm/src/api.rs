//! マッチングAPI呼び出し
//!
//! 取得はすべてGET。失敗は `Error` で返し、コンソールに警告を出すだけで
//! 再試行はしない。

use gloo::console;
use sponsor_match_common::{
    parse_entities, parse_health, parse_matches, Entity, EntityKind, Error, FetchTicket,
    HealthReport, MatchList, Result, HEALTH_PATH,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

/// GETしてレスポンス本文を文字列で返す（2xx以外はエラー）
async fn get_text(path: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Malformed("response body is not text".into()))
}

fn log_failure<T>(path: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        console::warn!(format!("GET {} failed: {}", path, e));
    }
    result
}

/// プルダウン用の一覧を取得
pub async fn fetch_entities(kind: EntityKind) -> Result<Vec<Entity>> {
    let path = kind.list_path();
    let result = match get_text(path).await {
        Ok(body) => parse_entities(kind, &body),
        Err(e) => Err(e),
    };
    log_failure(path, result)
}

/// マッチ結果を取得
pub async fn fetch_matches(ticket: FetchTicket) -> Result<MatchList> {
    let path = ticket.path();
    let result = match get_text(&path).await {
        Ok(body) => parse_matches(ticket.kind, &body),
        Err(e) => Err(e),
    };
    log_failure(&path, result)
}

/// 死活確認
pub async fn fetch_health() -> Result<HealthReport> {
    let result = match get_text(HEALTH_PATH).await {
        Ok(body) => parse_health(&body),
        Err(e) => Err(e),
    };
    log_failure(HEALTH_PATH, result)
}
