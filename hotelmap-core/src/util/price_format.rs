use itertools::Itertools;

/// formats an amount with comma thousands separators and at most three
/// fractional digits, dropping trailing zeros: 1250.0 -> "1,250", 799.5 -> "799.5".
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",");

    let sign = if amount < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
