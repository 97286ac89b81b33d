//! 寸法の単位除去

use regex::Regex;

/// 寸法文字列から "cm"（大文字小文字を問わない）を除去して前後の空白を落とす
///
/// 数値としての妥当性は検証しない
pub fn clean_dimension(raw: &str) -> String {
    lazy_static::lazy_static! {
        static ref UNIT_RE: Regex = Regex::new(r"(?i)cm").unwrap();
    }

    UNIT_RE.replace_all(raw, "").trim().to_string()
}
