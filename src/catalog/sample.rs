//! 組み込みのサンプルカタログ
//!
//! カタログファイルが無い環境でのデモ用。価格は最小通貨単位（price_cents）で持つ。

use homeinon_common::RawRow;

/// (title, category, price_cents, image_url, style)
const SAMPLE_PRODUCTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Modern Oak Bed", "furniture", "79900", "https://placehold.co/320x240/EEE/333?text=Oak+Bed", "modern"),
    ("Boho Rattan Chair", "furniture", "12900", "https://placehold.co/320x240/F9E4B7/333?text=Rattan+Chair", "boho"),
    ("Scandi Coffee Table", "furniture", "17900", "https://placehold.co/320x240/FFFBEA/333?text=Scandi+Table", "scandi"),
    ("Industrial Metal Lamp", "lighting", "8900", "https://placehold.co/320x240/C5C6C7/333?text=Metal+Lamp", "industrial"),
    ("Boho Woven Rug", "decor", "15900", "https://placehold.co/320x240/F4E1C1/333?text=Woven+Rug", "boho"),
    ("Modern Glass Mirror", "mirrors", "10900", "https://placehold.co/320x240/ECECEC/333?text=Glass+Mirror", "modern"),
    ("Industrial Floor Lamp", "lighting", "12900", "https://placehold.co/320x240/B8B8B8/333?text=Floor+Lamp", "industrial"),
    ("Scandi Wall Shelf", "decor", "6900", "https://placehold.co/320x240/FFF5E4/333?text=Wall+Shelf", "scandi"),
    ("Boho Macrame Hanger", "decor", "4900", "https://placehold.co/320x240/F8E1D4/333?text=Macrame+Hanger", "boho"),
    ("Modern Grey Sofa", "furniture", "49900", "https://placehold.co/320x240/DCDCDC/333?text=Grey+Sofa", "modern"),
    ("Industrial Pipe Shelf", "decor", "7800", "https://placehold.co/320x240/A9A9A9/333?text=Pipe+Shelf", "industrial"),
    ("Scandi Pendant Light", "lighting", "11900", "https://placehold.co/320x240/F9F9F9/333?text=Pendant+Light", "scandi"),
    ("Boho Wicker Basket", "decor", "5900", "https://placehold.co/320x240/ECD5B9/333?text=Wicker+Basket", "boho"),
    ("Modern Minimal Lamp", "lighting", "9900", "https://placehold.co/320x240/EFEFEF/333?text=Minimal+Lamp", "modern"),
    ("Industrial Clock", "decor", "8800", "https://placehold.co/320x240/B0B0B0/333?text=Industrial+Clock", "industrial"),
    ("Scandi Linen Curtains", "decor", "14900", "https://placehold.co/320x240/F2F2F2/333?text=Linen+Curtains", "scandi"),
    ("Boho Bamboo Lamp", "lighting", "11900", "https://placehold.co/320x240/F5E6CC/333?text=Bamboo+Lamp", "boho"),
    ("Modern Marble Table", "furniture", "89900", "https://placehold.co/320x240/EEE/333?text=Marble+Table", "modern"),
    ("Scandi Armchair", "furniture", "24900", "https://placehold.co/320x240/FFF9F2/333?text=Armchair", "scandi"),
    ("Industrial Leather Stool", "furniture", "16900", "https://placehold.co/320x240/BBB/333?text=Leather+Stool", "industrial"),
];

/// サンプルカタログの行
pub fn sample_rows() -> Vec<RawRow> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|(title, category, price_cents, image_url, style)| {
            RawRow::new()
                .with("title", *title)
                .with("category", *category)
                .with("price_cents", *price_cents)
                .with("image_url", *image_url)
                .with("style", *style)
        })
        .collect()
}
