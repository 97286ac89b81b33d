//! HomeInOn
//!
//! 家具カタログの正規化と、自然文クエリのカテゴリ分類

pub mod ai_provider;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod normalizer;

pub use catalog::{CatalogStore, LoadReport};
pub use classifier::{AiQueryClassifier, ClassificationFailure, QueryClassifier};
pub use error::{HomeInOnError, Result};
pub use normalizer::CatalogNormalizer;
