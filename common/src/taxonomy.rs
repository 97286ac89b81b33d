//! カテゴリ・タクソノミー
//!
//! クエリ分類で使う固定の参照データ:
//! - CATEGORIES: 許可されたカテゴリ（宣言順が出力順）
//! - SYNONYMS: 別表記 → 正規カテゴリ
//! - ROOMS: 部屋 → 許可カテゴリ
//!
//! プロンプト生成・キーワード照合・AI応答の検証はすべてここを参照する。

/// 許可カテゴリ（17種）
pub const CATEGORIES: &[&str] = &[
    "bed",
    "wardrobe",
    "sofa",
    "desk",
    "dining table",
    "coffee table",
    "mirror",
    "bookcase",
    "drawer",
    "cabinet",
    "tv unit",
    "bedside table",
    "dining chair",
    "armchair",
    "sideboard",
    "office chair",
    "bench",
];

/// 別表記 → 正規カテゴリ
pub const SYNONYMS: &[(&str, &str)] = &[
    ("couch", "sofa"),
    ("settee", "sofa"),
    ("closet", "wardrobe"),
    ("nightstand", "bedside table"),
    ("night stand", "bedside table"),
    ("tv stand", "tv unit"),
    ("media unit", "tv unit"),
    ("shelves", "bookcase"),
    ("shelving", "bookcase"),
    ("chest of drawers", "drawer"),
    ("dresser", "drawer"),
    ("kitchen table", "dining table"),
    ("writing desk", "desk"),
    ("accent chair", "armchair"),
    ("buffet", "sideboard"),
    ("credenza", "sideboard"),
    ("desk chair", "office chair"),
];

/// 部屋 → 許可カテゴリ
pub const ROOMS: &[(&str, &[&str])] = &[
    (
        "living room",
        &["sofa", "armchair", "coffee table", "tv unit", "bookcase", "cabinet", "sideboard", "mirror"],
    ),
    (
        "bedroom",
        &["bed", "wardrobe", "bedside table", "drawer", "mirror", "bench"],
    ),
    (
        "dining room",
        &["dining table", "dining chair", "sideboard", "cabinet", "bench", "mirror"],
    ),
    (
        "office",
        &["desk", "office chair", "bookcase", "cabinet", "drawer"],
    ),
    (
        "hallway",
        &["mirror", "bench", "cabinet"],
    ),
];

/// キーワード照合で何も見つからない場合の既定カテゴリ
pub const DEFAULT_CATEGORIES: &[&str] = &["sofa", "bed", "dining table"];

/// カテゴリ名を正規化（大文字小文字・前後空白を無視）
///
/// 許可カテゴリに含まれない場合は None
pub fn canonical_category(value: &str) -> Option<&'static str> {
    let needle = value.trim();
    CATEGORIES
        .iter()
        .copied()
        .find(|category| category.eq_ignore_ascii_case(needle))
}

/// 部屋名を正規化（大文字小文字・前後空白を無視）
pub fn canonical_room(value: &str) -> Option<&'static str> {
    let needle = value.trim();
    ROOMS
        .iter()
        .map(|(room, _)| *room)
        .find(|room| room.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_count() {
        assert_eq!(CATEGORIES.len(), 17);
        let unique: HashSet<_> = CATEGORIES.iter().collect();
        assert_eq!(unique.len(), CATEGORIES.len());
    }

    #[test]
    fn test_synonyms_point_to_categories() {
        for (alias, canonical) in SYNONYMS {
            assert!(
                CATEGORIES.contains(canonical),
                "synonym '{}' maps to unknown category '{}'",
                alias,
                canonical
            );
            assert!(!CATEGORIES.contains(alias), "synonym '{}' shadows a category", alias);
        }
    }

    #[test]
    fn test_rooms_reference_categories() {
        for (room, categories) in ROOMS {
            assert!(!categories.is_empty(), "room '{}' has no categories", room);
            for category in *categories {
                assert!(CATEGORIES.contains(category), "room '{}' uses '{}'", room, category);
            }
        }
    }

    #[test]
    fn test_default_categories_are_allowed() {
        for category in DEFAULT_CATEGORIES {
            assert!(CATEGORIES.contains(category));
        }
    }

    #[test]
    fn test_canonical_lookups() {
        assert_eq!(canonical_category("Dining Table"), Some("dining table"));
        assert_eq!(canonical_category(" BED "), Some("bed"));
        assert_eq!(canonical_category("spaceship"), None);
        assert_eq!(canonical_room("Living Room"), Some("living room"));
        assert_eq!(canonical_room("garage"), None);
    }
}
