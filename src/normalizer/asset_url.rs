//! 画像URLの解決

use regex::Regex;

/// 絶対URL（http/https）ならそのまま、それ以外は基準URLの下に置く
///
/// 空入力は空文字を返す（基準URLだけのURLは作らない）
pub fn resolve_asset_url(raw: &str, base_url: &str) -> String {
    lazy_static::lazy_static! {
        static ref ABSOLUTE_RE: Regex = Regex::new(r"(?i)^https?://").unwrap();
    }

    let path = raw.trim();
    if path.is_empty() {
        return String::new();
    }

    if ABSOLUTE_RE.is_match(path) {
        return path.to_string();
    }

    let base = base_url.trim().trim_end_matches('/');
    let relative = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", base, relative)
}
