use clap::Parser;
use homeinon::{ai_provider, cli, config, error};
use homeinon::{AiQueryClassifier, CatalogNormalizer, CatalogStore, QueryClassifier};
use homeinon_common::taxonomy;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Products { catalog, sample, format } => {
            let config = Config::load_or_default();
            let store = CatalogStore::new(CatalogNormalizer::new(config.asset_base_url.clone()));

            if sample {
                store.load_sample()?;
            } else {
                let path = catalog.unwrap_or_else(|| config.catalog_path.clone());
                // 失敗時はログ済み。空のスナップショットをそのまま出力する
                match store.spawn_load(path).await {
                    Ok(_) => {}
                    Err(e) => tracing::error!(error = %e, "catalog task aborted"),
                }
            }

            let products = store.list();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::json!({ "products": products.as_slice() });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Table => {
                    println!("{:<12} {:<36} {:>10}  {:<14} {}", "SKU", "TITLE", "PRICE", "CATEGORY", "IMAGE");
                    for p in products.iter() {
                        println!("{:<12} {:<36} {:>10}  {:<14} {}", p.sku, p.title, p.price, p.category, p.image_url);
                    }
                    println!("\n{}件", products.len());
                }
            }
        }

        Commands::Classify { query } => {
            let config = Config::load_or_default();
            let generator = ai_provider::build_generator(cli.ai_provider, &config);
            let classifier = QueryClassifier::new(AiQueryClassifier::new(generator, config.timeout()));

            let result = classifier.classify(&query).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Taxonomy => {
            let synonyms: Vec<_> = taxonomy::SYNONYMS
                .iter()
                .map(|(phrase, category)| serde_json::json!({ "phrase": phrase, "category": category }))
                .collect();
            let rooms: Vec<_> = taxonomy::ROOMS
                .iter()
                .map(|(room, categories)| serde_json::json!({ "room": room, "categories": categories }))
                .collect();
            let json = serde_json::json!({
                "categories": taxonomy::CATEGORIES,
                "synonyms": synonyms,
                "rooms": rooms,
                "default_categories": taxonomy::DEFAULT_CATEGORIES,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }

        Commands::Config { set_api_key, show } => {
            // 保存前の読み込みは厳密に行う
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  画像ベースURL: {}", config.asset_base_url);
                println!("  カタログ: {}", config.catalog_path.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.has_api_key() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
