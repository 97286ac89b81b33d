use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomeInOnError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`homeinon config --set-api-key YOUR_KEY` または GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログ読み込みエラー: {0}")]
    CatalogLoad(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] homeinon_common::Error),
}

pub type Result<T> = std::result::Result<T, HomeInOnError>;
