//! HomeInOn Common Library
//!
//! カタログ正規化・クエリ分類で共有される型と純粋ロジック（I/Oなし）

pub mod types;
pub mod taxonomy;
pub mod keyword;
pub mod error;
pub mod parser;
pub mod prompts;

pub use types::{CategoryQueryResult, ClassificationSource, Confidence, ProductRecord, RawRow};
pub use error::{Error, Result};
pub use keyword::{classify_keywords, match_keywords};
pub use parser::{extract_json, parse_category_response, ParsedClassification};
pub use prompts::build_category_prompt;
pub use taxonomy::{CATEGORIES, DEFAULT_CATEGORIES, ROOMS, SYNONYMS};
