//! プロンプト生成モジュール
//!
//! クエリ分類用のプロンプトをタクソノミーから組み立てる。
//! 語彙・別表記・部屋の対応表はすべて taxonomy から埋め込む。

use crate::taxonomy::{CATEGORIES, ROOMS, SYNONYMS};

/// カテゴリ分類プロンプト生成
///
/// # Arguments
/// * `query` - ユーザーの自由入力クエリ
///
/// # Returns
/// AIに送るプロンプト文字列。応答は単一のJSONオブジェクトを要求する。
pub fn build_category_prompt(query: &str) -> String {
    let categories = CATEGORIES
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");

    let synonyms = SYNONYMS
        .iter()
        .map(|(alias, canonical)| format!("- \"{}\" -> \"{}\"", alias, canonical))
        .collect::<Vec<_>>()
        .join("\n");

    let rooms = ROOMS
        .iter()
        .map(|(room, allowed)| {
            let allowed = allowed
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", ");
            format!("- \"{}\": [{}]", room, allowed)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let query = query.trim();

    format!(
        r#"You are a furniture catalog assistant. Map the shopper's request to catalog categories.

## Allowed categories (use these exact strings only)
{categories}

## Synonyms (always answer with the canonical name on the right)
{synonyms}

## Rooms and the categories that belong to them
{rooms}

## Rules
- Only output categories from the allowed list. Never invent new categories.
- If the request names a room, set "room" to that room and pick categories from that room's list.
- If no room is mentioned, set "room" to null.
- "confidence" must be one of "high", "medium", "low".
- If nothing in the request matches, return an empty "categories" array.

## Output format (a single JSON object, no explanation, no markdown)
{{"categories": ["category"], "room": "room name or null", "confidence": "high"}}

Shopper request:
{query}"#
    )
}
