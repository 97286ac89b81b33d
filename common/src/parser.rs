//! AIレスポンスパーサー
//!
//! AIの応答テキストからJSONを抽出し、カテゴリ分類結果として検証する。
//! 検証を通るまではどのフィールドも信用しない。

use crate::error::{Error, Result};
use crate::taxonomy::{canonical_category, canonical_room};
use crate::types::Confidence;
use serde_json::Value;

/// 検証済みのAI分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClassification {
    /// 許可カテゴリに絞り込み済み（空の場合あり）
    pub categories: Vec<String>,
    pub room: Option<String>,
    pub confidence: Confidence,
}

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ``` ... ``` ブロック（言語タグは無視）
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use homeinon_common::extract_json;
///
/// let response = "```json\n{\"categories\": [\"bed\"]}\n```";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"categories\": [\"bed\"]}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    let trimmed = response.trim();

    // ``` ... ``` ブロックを探す
    if let Some(fence) = trimmed.find("```") {
        let after_fence = &trimmed[fence + 3..];
        // 言語タグ（```json 等）を行末まで読み飛ばす
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        if let Some(end) = body.find("```") {
            let inner = body[..end].trim();
            if !inner.is_empty() {
                return Ok(inner);
            }
        }
    }

    // 生の {...} を探す
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if end >= start {
                return Ok(&trimmed[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// カテゴリ分類レスポンスをパース
///
/// `categories` 配列が無い・配列でない場合はエラー。
/// 語彙外のカテゴリは黙って除外する（大文字小文字は無視）。
pub fn parse_category_response(response: &str) -> Result<ParsedClassification> {
    let json_str = extract_json(response)?;
    let value: Value = serde_json::from_str(json_str)?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::Parse("response is not a JSON object".into()))?;

    let raw_categories = object
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Parse("response has no \"categories\" array".into()))?;

    let mut categories: Vec<String> = Vec::new();
    for item in raw_categories {
        let Some(category) = item.as_str().and_then(canonical_category) else {
            continue;
        };
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }

    let room = object
        .get("room")
        .and_then(Value::as_str)
        .and_then(canonical_room)
        .map(str::to_string);

    let confidence = object
        .get("confidence")
        .and_then(Value::as_str)
        .and_then(Confidence::from_reported)
        .unwrap_or(Confidence::Low);

    Ok(ParsedClassification {
        categories,
        room,
        confidence,
    })
}
