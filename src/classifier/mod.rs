//! クエリ分類
//!
//! AI分類を試み、失敗または有効カテゴリなしの場合はキーワード照合に落とす。
//! 呼び出し側には常に整形済みの結果を返し、AI側のエラーは表に出さない。

pub mod ai;

pub use ai::{AiQueryClassifier, ClassificationFailure};

use homeinon_common::{classify_keywords, CategoryQueryResult, ClassificationSource};
use tracing::{info, warn};

#[derive(Clone)]
pub struct QueryClassifier {
    ai: AiQueryClassifier,
}

impl QueryClassifier {
    pub fn new(ai: AiQueryClassifier) -> Self {
        Self { ai }
    }

    pub async fn classify(&self, query: &str) -> CategoryQueryResult {
        let query = query.trim();
        if query.is_empty() {
            return CategoryQueryResult::empty_query();
        }

        match self.ai.classify(query).await {
            Ok(parsed) if !parsed.categories.is_empty() => {
                info!(categories = ?parsed.categories, room = ?parsed.room, "classified by ai");
                CategoryQueryResult {
                    categories: parsed.categories,
                    room: parsed.room,
                    confidence: parsed.confidence,
                    source: ClassificationSource::Ai,
                }
            }
            Ok(_) => {
                warn!("ai returned no allowed categories, using keyword matching");
                CategoryQueryResult::fallback(classify_keywords(query))
            }
            Err(failure) => {
                warn!(reason = %failure, "ai classification failed, using keyword matching");
                CategoryQueryResult::fallback(classify_keywords(query))
            }
        }
    }
}
