//! 共通の型定義
//!
//! カタログ正規化とクエリ分類で共有される型:
//! - RawRow: 表形式ソースの1行（列名 → 値）
//! - ProductRecord: 正規化済みの商品レコード
//! - CategoryQueryResult: クエリ分類の最終出力

use serde::{Deserialize, Serialize};
use std::fmt;

/// 表形式ソースの1行
///
/// 列の順序はソースのヘッダー順を保持する。
/// 同じ列名が複数ある場合は先に現れた列を優先する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 列を追加（ビルダー形式）
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.push((column.into(), value.into()));
    }

    /// 列名で値を取得
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// 正規化済み商品レコード
///
/// すべてのフィールドは文字列。数値系フィールドは整形済みの10進文字列か空文字。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub sku: String,
    pub title: String,
    /// 小数2桁の価格（例: "799.00"）
    pub price: String,
    pub description: String,
    pub colour: String,
    pub material: String,
    pub category: String,
    pub style: String,
    pub room: String,
    pub width: String,
    pub depth: String,
    pub height: String,
    /// 絶対URL
    pub image_url: String,
    /// 絶対URL
    pub cutout_local_path: String,
}

impl From<&ProductRecord> for RawRow {
    /// 正規化済みレコードを正規の列名で行に戻す
    fn from(record: &ProductRecord) -> Self {
        RawRow::new()
            .with("sku", &record.sku)
            .with("title", &record.title)
            .with("price", &record.price)
            .with("description", &record.description)
            .with("colour", &record.colour)
            .with("material", &record.material)
            .with("category", &record.category)
            .with("style", &record.style)
            .with("room", &record.room)
            .with("width", &record.width)
            .with("depth", &record.depth)
            .with("height", &record.height)
            .with("image_url", &record.image_url)
            .with("cutout_local_path", &record.cutout_local_path)
    }
}

/// 分類の確信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    /// キーワード照合へのフォールバック
    Fallback,
    /// クエリが空
    None,
}

impl Confidence {
    /// AIが報告した確信度を解釈（high/medium/lowのみ受け付ける）
    pub fn from_reported(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Confidence::High),
            "medium" => Some(Confidence::Medium),
            "low" => Some(Confidence::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Fallback => "fallback",
            Confidence::None => "none",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分類結果の出所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    Ai,
    KeywordMatching,
    None,
}

impl fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationSource::Ai => f.write_str("ai"),
            ClassificationSource::KeywordMatching => f.write_str("keyword_matching"),
            ClassificationSource::None => f.write_str("none"),
        }
    }
}

/// クエリ分類の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQueryResult {
    /// 正規カテゴリ名（重複なし、タクソノミーに含まれるもののみ）
    pub categories: Vec<String>,
    /// 部屋（不明ならnull）
    pub room: Option<String>,
    pub confidence: Confidence,
    pub source: ClassificationSource,
}

impl CategoryQueryResult {
    /// 空クエリ用の結果
    pub fn empty_query() -> Self {
        Self {
            categories: Vec::new(),
            room: None,
            confidence: Confidence::None,
            source: ClassificationSource::None,
        }
    }

    /// キーワード照合によるフォールバック結果
    pub fn fallback(categories: Vec<String>) -> Self {
        Self {
            categories,
            room: None,
            confidence: Confidence::Fallback,
            source: ClassificationSource::KeywordMatching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_first_column_wins() {
        let row = RawRow::new().with("title", "Oak Bed").with("title", "Other");
        assert_eq!(row.get("title"), Some("Oak Bed"));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_raw_row_from_record_uses_canonical_columns() {
        let record = ProductRecord {
            sku: "B-1".to_string(),
            height: "90".to_string(),
            ..Default::default()
        };
        let row = RawRow::from(&record);
        assert_eq!(row.get("sku"), Some("B-1"));
        assert_eq!(row.get("height"), Some("90"));
        assert_eq!(row.get("price"), Some(""));
    }

    #[test]
    fn test_confidence_from_reported() {
        assert_eq!(Confidence::from_reported("HIGH"), Some(Confidence::High));
        assert_eq!(Confidence::from_reported(" medium "), Some(Confidence::Medium));
        assert_eq!(Confidence::from_reported("fallback"), None);
        assert_eq!(Confidence::from_reported(""), None);
    }

    #[test]
    fn test_result_serialization_shape() {
        let json = serde_json::to_value(CategoryQueryResult::empty_query()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "categories": [],
                "room": null,
                "confidence": "none",
                "source": "none"
            })
        );

        let json = serde_json::to_value(CategoryQueryResult::fallback(vec!["bed".into()])).unwrap();
        assert_eq!(json["confidence"], "fallback");
        assert_eq!(json["source"], "keyword_matching");
    }
}
