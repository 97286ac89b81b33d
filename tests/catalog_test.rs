//! カタログ読み込みテスト
//!
//! ファイルからの読み込み、失敗時のスナップショット保持を検証

use homeinon::catalog::CatalogStore;
use homeinon::error::{HomeInOnError, Result};
use homeinon::normalizer::CatalogNormalizer;
use homeinon_common::RawRow;
use std::sync::Arc;
use tempfile::tempdir;

const BASE: &str = "https://x.test";

fn store() -> CatalogStore {
    CatalogStore::new(CatalogNormalizer::new(BASE))
}

const GOOD_CSV: &str = "\
code,title,price,description,colour,material,category,style,room,Height,Depth,Width,image_url,cutout_local_path
OB-1,Modern Oak Bed,79900,Solid oak frame,Natural,Oak,bed,modern,bedroom,95cm,210cm,160cm,/images/oak-bed.jpg,cutouts/oak-bed.png
GS-2,Grey Sofa,499.5,,Grey,Fabric,sofa,modern,living room,85 CM,95,220cm,https://cdn.test/sofa.jpg,
";

/// CSVファイルからの読み込み
#[tokio::test]
async fn test_load_csv_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products_clean.csv");
    std::fs::write(&path, GOOD_CSV).unwrap();

    let store = store();
    let report = store.load_path(&path).await.expect("load failed");
    assert_eq!(report.products, 2);
    assert_eq!(report.missing_price, 0);

    let products = store.list();
    let bed = &products[0];
    assert_eq!(bed.sku, "OB-1");
    assert_eq!(bed.price, "799.00");
    assert_eq!(bed.height, "95");
    assert_eq!(bed.image_url, "https://x.test/images/oak-bed.jpg");
    assert_eq!(bed.cutout_local_path, "https://x.test/cutouts/oak-bed.png");

    let sofa = &products[1];
    assert_eq!(sofa.price, "499.50");
    assert_eq!(sofa.height, "85");
    assert_eq!(sofa.description, "");
    assert_eq!(sofa.image_url, "https://cdn.test/sofa.jpg");
    assert_eq!(sofa.cutout_local_path, "");
}

/// 列数の合わない行があっても読み込みは止まらない
#[tokio::test]
async fn test_short_row_loads_with_empty_fields() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ragged.csv");
    std::fs::write(
        &path,
        "code,title,price,cutout_local_path\nA-1,Bed,100,a.png\nA-2,Sofa,200\nA-3,Desk,300,c.png\n",
    )
    .unwrap();

    let store = store();
    let report = store.load_path(&path).await.expect("ragged rows should load");
    assert_eq!(report.products, 3);

    let products = store.list();
    assert_eq!(products[0].cutout_local_path, "https://x.test/a.png");
    assert_eq!(products[1].title, "Sofa");
    assert_eq!(products[1].price, "200.00");
    assert_eq!(products[1].cutout_local_path, "");
    assert_eq!(products[2].cutout_local_path, "https://x.test/c.png");
}

/// 初回読み込みが途中で失敗した場合は空のまま
#[tokio::test]
async fn test_first_load_failure_leaves_empty_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, b"code,title\nA-1,Bed\nA-2,Sofa\nA-3,\xff\xfe\nA-4,Chair\n").unwrap();

    let store = store();
    let result = store.load_path(&path).await;
    assert!(matches!(result, Err(HomeInOnError::CatalogLoad(_))));
    assert!(store.list().is_empty());
}

/// 再読み込みが途中で失敗した場合は直前のカタログが残る
#[tokio::test]
async fn test_reload_failure_keeps_previous_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let good = dir.path().join("good.csv");
    let broken = dir.path().join("broken.csv");
    std::fs::write(&good, GOOD_CSV).unwrap();
    std::fs::write(&broken, b"code,title\nB-1,Bench\nB-2,Mirror \xc3\x28\n").unwrap();

    let store = store();
    store.load_path(&good).await.unwrap();
    let before = store.list();

    assert!(store.load_path(&broken).await.is_err());
    let after = store.list();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 2);
}

/// 存在しないファイルはエラーで、カタログは空のまま
#[tokio::test]
async fn test_missing_file_keeps_empty_catalog() {
    let store = store();
    let handle = store.spawn_load("/nonexistent/products_clean.csv".into());
    let result = handle.await.expect("task panicked");
    assert!(matches!(result, Err(HomeInOnError::FileNotFound(_))));
    assert!(store.list().is_empty());
}

/// 途中で失敗するストリーム（N行後にエラー）
#[test]
fn test_stream_error_after_rows_is_never_partially_visible() {
    let store = store();
    store.load_sample().unwrap();
    let before = store.list();

    let rows: Vec<Result<RawRow>> = (0..5)
        .map(|i| Ok(RawRow::new().with("title", format!("Row {}", i))))
        .chain(std::iter::once(Err(HomeInOnError::CatalogLoad("disconnected".into()))))
        .collect();

    assert!(store.load(rows).is_err());
    assert_eq!(store.list().len(), before.len());
    assert!(store.list().iter().all(|p| !p.title.starts_with("Row ")));
}

/// 別名の列でも読み込める
#[tokio::test]
async fn test_alias_columns() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("alt.csv");
    std::fs::write(
        &path,
        "sku,name,price_gbp,color,product_kind,height,base_image\nX-1,Walnut Desk,129,Brown,desk,75cm,desk.jpg\n",
    )
    .unwrap();

    let store = store();
    store.load_path(&path).await.unwrap();

    let desk = &store.list()[0];
    assert_eq!(desk.sku, "X-1");
    assert_eq!(desk.title, "Walnut Desk");
    assert_eq!(desk.price, "129.00");
    assert_eq!(desk.colour, "Brown");
    assert_eq!(desk.category, "desk");
    assert_eq!(desk.height, "75");
    assert_eq!(desk.image_url, "https://x.test/desk.jpg");
}

/// JSON出力の形
#[test]
fn test_products_serialize_with_canonical_fields() {
    let store = store();
    store.load_sample().unwrap();

    let json = serde_json::to_value(store.list().as_slice()).unwrap();
    let first = &json[0];
    for field in [
        "sku", "title", "price", "description", "colour", "material", "category", "style", "room",
        "width", "depth", "height", "image_url", "cutout_local_path",
    ] {
        assert!(first[field].is_string(), "{} should be a string", field);
    }
    assert_eq!(first["price"], "799.00");
}
