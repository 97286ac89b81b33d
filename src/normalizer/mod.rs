//! カタログ正規化モジュール
//!
//! 表形式ソースの1行を正規の商品レコードに変換する。
//!
//! ## 処理フロー
//! 1. 列名エイリアスの解決（先に現れた空でない列を採用）
//! 2. 価格の解釈（最小通貨単位の判定）
//! 3. 寸法の単位除去
//! 4. 画像URLの絶対化
//!
//! 壊れた行でもエラーにはしない。解決できないフィールドは空文字になる。

pub mod asset_url;
pub mod dimensions;
pub mod price;

use homeinon_common::{ProductRecord, RawRow};

pub use asset_url::resolve_asset_url;
pub use dimensions::clean_dimension;
pub use price::interpret_price;

/// 正規フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Sku,
    Title,
    Price,
    Description,
    Colour,
    Material,
    Category,
    Style,
    Room,
    Height,
    Depth,
    Width,
    ImageUrl,
    CutoutLocalPath,
}

impl ProductField {
    pub const ALL: [ProductField; 14] = [
        ProductField::Sku,
        ProductField::Title,
        ProductField::Price,
        ProductField::Description,
        ProductField::Colour,
        ProductField::Material,
        ProductField::Category,
        ProductField::Style,
        ProductField::Room,
        ProductField::Height,
        ProductField::Depth,
        ProductField::Width,
        ProductField::ImageUrl,
        ProductField::CutoutLocalPath,
    ];

    /// ソース列名の候補（優先順）
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ProductField::Sku => &["sku", "code"],
            ProductField::Title => &["title", "name", "product_name"],
            ProductField::Price => &["price", "price_cents", "price_gbp"],
            ProductField::Description => &["description", "collection_description"],
            ProductField::Colour => &["colour", "color"],
            ProductField::Material => &["material"],
            ProductField::Category => &["category", "product_kind"],
            ProductField::Style => &["style"],
            ProductField::Room => &["room"],
            ProductField::Height => &["Height", "height"],
            ProductField::Depth => &["Depth", "depth"],
            ProductField::Width => &["Width", "width"],
            ProductField::ImageUrl => &["image_url", "base_image"],
            ProductField::CutoutLocalPath => &["cutout_local_path"],
        }
    }

    /// 行からフィールド値を解決（前後空白除去済み、見つからなければ空文字）
    pub fn resolve<'a>(&self, row: &'a RawRow) -> &'a str {
        self.aliases()
            .iter()
            .filter_map(|alias| row.get(alias))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

/// 行を商品レコードに変換する
#[derive(Debug, Clone)]
pub struct CatalogNormalizer {
    asset_base_url: String,
}

impl CatalogNormalizer {
    pub fn new(asset_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
        }
    }

    pub fn asset_base_url(&self) -> &str {
        &self.asset_base_url
    }

    pub fn normalize(&self, row: &RawRow) -> ProductRecord {
        let text = |field: ProductField| field.resolve(row).to_string();
        let dimension = |field: ProductField| clean_dimension(field.resolve(row));
        let url = |field: ProductField| resolve_asset_url(field.resolve(row), &self.asset_base_url);

        ProductRecord {
            sku: text(ProductField::Sku),
            title: text(ProductField::Title),
            price: interpret_price(ProductField::Price.resolve(row)),
            description: text(ProductField::Description),
            colour: text(ProductField::Colour),
            material: text(ProductField::Material),
            category: text(ProductField::Category),
            style: text(ProductField::Style),
            room: text(ProductField::Room),
            width: dimension(ProductField::Width),
            depth: dimension(ProductField::Depth),
            height: dimension(ProductField::Height),
            image_url: url(ProductField::ImageUrl),
            cutout_local_path: url(ProductField::CutoutLocalPath),
        }
    }
}
