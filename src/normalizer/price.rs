//! 価格の解釈
//!
//! 数字のみで 1000 を超える値は最小通貨単位（ペンス/セント）とみなして 100 で割る。
//! この規則はどの価格列（price / price_cents / price_gbp）にも同じく適用する。

/// これを超える数字のみの価格は最小通貨単位として扱う
pub const MINOR_UNIT_THRESHOLD: u64 = 1000;

/// 生の価格文字列を小数2桁の文字列に変換
///
/// 空・数値でない場合は空文字を返す
pub fn interpret_price(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return interpret_digits(trimmed);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}", value),
        _ => String::new(),
    }
}

/// 数字のみの価格
///
/// 桁数に上限はない。最小通貨単位は文字列上で小数点を2桁左に入れて割る
fn interpret_digits(digits: &str) -> String {
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };

    match digits.parse::<u64>() {
        Ok(value) if value <= MINOR_UNIT_THRESHOLD => format!("{}.00", value),
        _ => {
            let (units, minor) = digits.split_at(digits.len() - 2);
            format!("{}.{}", units, minor)
        }
    }
}
