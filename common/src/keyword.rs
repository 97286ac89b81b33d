//! キーワード照合によるカテゴリ抽出
//!
//! AI分類が使えない場合のフォールバック。
//! 各カテゴリに単語境界付きの正規表現を1つずつ持ち、小文字化したクエリと照合する。
//! 単語境界があるので "desktop" は "desk" に一致しない。

use crate::taxonomy::DEFAULT_CATEGORIES;
use regex::Regex;

/// カテゴリごとの照合パターン（タクソノミーの宣言順）
///
/// 複数形とタクソノミーの別表記を含む
pub const KEYWORD_PATTERNS: &[(&str, &str)] = &[
    ("bed", r"\bbeds?\b"),
    ("wardrobe", r"\b(wardrobes?|closets?)\b"),
    ("sofa", r"\b(sofas?|couch(es)?|settees?)\b"),
    ("desk", r"\b(desks?|writing desks?)\b"),
    ("dining table", r"\b(dining tables?|kitchen tables?)\b"),
    ("coffee table", r"\bcoffee tables?\b"),
    ("mirror", r"\bmirrors?\b"),
    ("bookcase", r"\b(bookcases?|bookshel(f|ves)|shelves|shelving)\b"),
    ("drawer", r"\b(drawers?|chests? of drawers|dressers?)\b"),
    ("cabinet", r"\bcabinets?\b"),
    ("tv unit", r"\b(tv units?|tv stands?|media units?)\b"),
    ("bedside table", r"\b(bedside tables?|night ?stands?)\b"),
    ("dining chair", r"\bdining chairs?\b"),
    ("armchair", r"\b(armchairs?|accent chairs?)\b"),
    ("sideboard", r"\b(sideboards?|buffets?|credenzas?)\b"),
    ("office chair", r"\b(office chairs?|desk chairs?)\b"),
    ("bench", r"\bbench(es)?\b"),
];

/// 直後に続くと別カテゴリの語になる接尾辞
///
/// "desk chair" は office chair であり desk ではない
const COMPOUND_SUFFIXES: &[(&str, &[&str])] = &[("desk", &[" chair"])];

lazy_static::lazy_static! {
    static ref COMPILED_PATTERNS: Vec<(&'static str, Regex)> = KEYWORD_PATTERNS
        .iter()
        .map(|(category, pattern)| (*category, Regex::new(pattern).unwrap()))
        .collect();
}

/// クエリに一致したカテゴリを返す（一致なしなら空）
pub fn match_keywords(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let mut detected: Vec<String> = Vec::new();

    for (category, regex) in COMPILED_PATTERNS.iter() {
        if is_category_match(category, regex, &lower) && !detected.iter().any(|c| c == category) {
            detected.push(category.to_string());
        }
    }

    detected
}

/// 複合語の一部として現れた一致を除いて判定する
fn is_category_match(category: &str, regex: &Regex, text: &str) -> bool {
    let suffixes: &[&str] = COMPOUND_SUFFIXES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, suffixes)| *suffixes)
        .unwrap_or(&[]);

    regex
        .find_iter(text)
        .any(|m| !suffixes.iter().any(|suffix| text[m.end()..].starts_with(suffix)))
}

/// キーワード照合でカテゴリを抽出
///
/// 一致がなければ既定カテゴリ（sofa, bed, dining table）を返すため、結果は常に空でない
pub fn classify_keywords(query: &str) -> Vec<String> {
    let detected = match_keywords(query);
    if detected.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        detected
    }
}
