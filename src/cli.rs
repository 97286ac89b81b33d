use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "homeinon")]
#[command(about = "家具カタログの正規化と自然文クエリのカテゴリ分類", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (gemini/claude)
    #[arg(long, default_value = "gemini", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを読み込み、正規化済みの商品一覧を出力
    Products {
        /// カタログファイル（CSV / xlsx / ods）。省略時は設定値
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 組み込みのサンプルカタログを使用
        #[arg(long, conflicts_with = "catalog")]
        sample: bool,

        /// 出力形式 (json/table)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// 自然文クエリをカテゴリに分類
    Classify {
        /// クエリ（例: "a grey sofa for the living room"）
        #[arg(required = true)]
        query: String,
    },

    /// 分類に使うカテゴリ・別表記・部屋の一覧を出力
    Taxonomy,

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown format: {}. Use json or table", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
