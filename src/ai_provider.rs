//! AIテキスト生成の連携先
//!
//! 「プロンプトを渡してテキストを受け取る（失敗あり）」だけを約束する。
//! - Gemini: HTTP API（reqwest）
//! - Claude: `claude -p` CLI をサブプロセスで起動

use crate::config::Config;
use crate::error::{HomeInOnError, Result};
use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiProvider {
    Gemini,
    Claude,
}

impl AiProvider {
    pub fn command_name(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::Claude => "claude",
        }
    }
}

/// テキスト生成の連携先
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// 設定から連携先を組み立てる
///
/// 認証情報が無い場合は None（分類側でフォールバック扱いになる）
pub fn build_generator(provider: AiProvider, config: &Config) -> Option<Arc<dyn TextGenerator>> {
    match provider {
        AiProvider::Gemini => match config.get_api_key() {
            Ok(api_key) => match GeminiGenerator::new(api_key, config.model.clone(), config.timeout()) {
                Ok(generator) => Some(Arc::new(generator)),
                Err(e) => {
                    warn!(error = %e, "failed to build gemini client");
                    None
                }
            },
            Err(_) => {
                warn!("GEMINI_API_KEY is not set; queries will use keyword matching");
                None
            }
        },
        AiProvider::Claude => Some(Arc::new(ClaudeCliGenerator::default())),
    }
}

// =============================================
// Gemini
// =============================================

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HomeInOnError::ApiCall(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    fn request_body(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json".into(),
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, self.model, self.api_key);

        let response = self
            .client
            .post(url)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| HomeInOnError::ApiCall(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HomeInOnError::ApiCall(format!("Gemini API error {}: {}", status, body)));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| HomeInOnError::ApiParse(e.without_url().to_string()))?;

        extract_candidate_text(payload)
    }
}

fn extract_candidate_text(payload: GeminiResponse) -> Result<String> {
    payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| HomeInOnError::ApiParse("Gemini応答が空です".into()))
}

// =============================================
// Claude CLI
// =============================================

pub struct ClaudeCliGenerator {
    program: String,
}

impl Default for ClaudeCliGenerator {
    fn default() -> Self {
        Self::new(AiProvider::Claude.command_name())
    }
}

impl ClaudeCliGenerator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for ClaudeCliGenerator {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        // タイムアウトで future が破棄された時にプロセスも終了させる
        let output = tokio::process::Command::new(&self.program)
            .args(["-p", prompt, "--output-format", "text"])
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| HomeInOnError::ApiCall(format!("Claude CLI実行エラー: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HomeInOnError::ApiCall(format!(
                "Claude CLI failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();
        debug!(chars = response.len(), "claude cli responded");
        Ok(response)
    }
}
