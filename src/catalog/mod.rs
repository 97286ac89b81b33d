//! 商品カタログストア
//!
//! 表形式ソースを正規化して保持する。書き手は読み込み処理だけで、
//! 読み込み完了時にスナップショット全体を1回で差し替える。
//! 読み込み途中で失敗した場合は直前のスナップショットがそのまま残る。

pub mod sample;
pub mod source;

use crate::error::{HomeInOnError, Result};
use crate::normalizer::CatalogNormalizer;
use homeinon_common::{ProductRecord, RawRow};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use source::{open_source, CsvSource, RowStream, WorkbookSource};

/// カタログのスナップショット
pub type CatalogSnapshot = Arc<Vec<ProductRecord>>;

/// 読み込み結果の統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// 読み込んだ商品数
    pub products: usize,
    /// タイトルが空の商品数
    pub missing_title: usize,
    /// 価格が空の商品数
    pub missing_price: usize,
}

impl LoadReport {
    fn from_products(products: &[ProductRecord]) -> Self {
        Self {
            products: products.len(),
            missing_title: products.iter().filter(|p| p.title.is_empty()).count(),
            missing_price: products.iter().filter(|p| p.price.is_empty()).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    normalizer: Arc<CatalogNormalizer>,
    snapshot: Arc<watch::Sender<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new(normalizer: CatalogNormalizer) -> Self {
        let (sender, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            normalizer: Arc::new(normalizer),
            snapshot: Arc::new(sender),
        }
    }

    /// 現在のスナップショット
    pub fn list(&self) -> CatalogSnapshot {
        self.snapshot.borrow().clone()
    }

    /// 差し替えを監視する受信側
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.snapshot.subscribe()
    }

    /// 行ストリームを読み込み、完了したらスナップショットを差し替える
    ///
    /// 途中でエラーが出た場合は何も差し替えずにエラーを返す
    pub fn load<I>(&self, rows: I) -> Result<LoadReport>
    where
        I: IntoIterator<Item = Result<RawRow>>,
    {
        let mut products = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.map_err(|e| {
                error!(row = index + 1, error = %e, "catalog stream failed, keeping previous snapshot");
                HomeInOnError::CatalogLoad(format!("{}行目: {}", index + 1, e))
            })?;
            products.push(self.normalizer.normalize(&row));
        }

        let report = LoadReport::from_products(&products);
        self.snapshot.send_replace(Arc::new(products));

        info!(
            products = report.products,
            missing_title = report.missing_title,
            missing_price = report.missing_price,
            asset_base_url = self.normalizer.asset_base_url(),
            "catalog loaded"
        );
        Ok(report)
    }

    /// ファイルから読み込む（ブロッキング読み込みは専用スレッドで実行）
    ///
    /// ストリーム途中の失敗は `load` が記録する。ここではソースを開けない場合だけ記録する
    pub async fn load_path(&self, path: &Path) -> Result<LoadReport> {
        let store = self.clone();
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || {
            let rows = open_source(&path).map_err(|e| {
                error!(path = %path.display(), error = %e, "catalog source unavailable, keeping previous snapshot");
                e
            })?;
            store.load(rows)
        })
        .await
        .map_err(|e| {
            error!(error = %e, "catalog load task failed");
            HomeInOnError::CatalogLoad(e.to_string())
        })?
    }

    /// 起動時のバックグラウンド読み込み
    pub fn spawn_load(&self, path: PathBuf) -> JoinHandle<Result<LoadReport>> {
        let store = self.clone();
        tokio::spawn(async move { store.load_path(&path).await })
    }

    /// 組み込みサンプルを読み込む
    pub fn load_sample(&self) -> Result<LoadReport> {
        self.load(sample::sample_rows().into_iter().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::new(CatalogNormalizer::new("https://x.test"))
    }

    #[test]
    fn test_new_store_is_empty() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let store = store();
        let rows = vec![
            Ok(RawRow::new().with("title", "Bed").with("price", "100")),
            Ok(RawRow::new().with("title", "Sofa")),
        ];

        let report = store.load(rows).unwrap();
        assert_eq!(
            report,
            LoadReport {
                products: 2,
                missing_title: 0,
                missing_price: 1
            }
        );
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0].price, "100.00");
    }

    #[test]
    fn test_failed_load_keeps_previous_snapshot() {
        let store = store();
        store.load(vec![Ok(RawRow::new().with("title", "Old"))]).unwrap();
        let before = store.list();

        let rows = vec![
            Ok(RawRow::new().with("title", "New 1")),
            Ok(RawRow::new().with("title", "New 2")),
            Err(HomeInOnError::CatalogLoad("stream broke".into())),
        ];
        assert!(store.load(rows).is_err());

        let after = store.list();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after[0].title, "Old");
    }

    #[test]
    fn test_reader_keeps_old_snapshot_across_reload() {
        let store = store();
        store.load(vec![Ok(RawRow::new().with("title", "A"))]).unwrap();
        let held = store.list();

        store
            .load(vec![Ok(RawRow::new().with("title", "B")), Ok(RawRow::new().with("title", "C"))])
            .unwrap();

        assert_eq!(held.len(), 1);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_load_sample() {
        let store = store();
        let report = store.load_sample().unwrap();
        assert_eq!(report.products, 20);
        assert_eq!(store.list()[0].price, "799.00");
    }

    #[test]
    fn test_subscribe_sees_replacement() {
        let store = store();
        let mut receiver = store.subscribe();
        store.load(vec![Ok(RawRow::new().with("title", "Bed"))]).unwrap();
        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().len(), 1);
    }
}
