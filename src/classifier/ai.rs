//! AIによるクエリ分類
//!
//! タクソノミー入りのプロンプトを1回だけ送り、応答をスキーマ検証する。
//! リトライはしない。失敗はすべて `ClassificationFailure` として返す。

use crate::ai_provider::TextGenerator;
use homeinon_common::{build_category_prompt, parse_category_response, ParsedClassification};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// AI分類の失敗理由
#[derive(Error, Debug)]
pub enum ClassificationFailure {
    #[error("AI credentials are not configured")]
    MissingCredential,

    #[error("AI provider error: {0}")]
    Provider(String),

    #[error("AI provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid AI response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct AiQueryClassifier {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl AiQueryClassifier {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn classify(&self, query: &str) -> Result<ParsedClassification, ClassificationFailure> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(ClassificationFailure::MissingCredential)?;

        let prompt = build_category_prompt(query);
        debug!(provider = generator.name(), chars = prompt.len(), "sending category prompt");

        // タイムアウト時は生成中の future をここで破棄する
        let response = tokio::time::timeout(self.timeout, generator.generate(&prompt))
            .await
            .map_err(|_| ClassificationFailure::Timeout(self.timeout))?
            .map_err(|e| ClassificationFailure::Provider(e.to_string()))?;

        parse_category_response(&response)
            .map_err(|e| ClassificationFailure::InvalidResponse(e.to_string()))
    }
}
