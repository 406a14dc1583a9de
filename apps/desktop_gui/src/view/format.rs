/// Groups digits in threes with commas, matching an en-US locale:
/// `50000` becomes `50,000` and `-1234` becomes `-1,234`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fixed-point text with ties rounded away from zero, so `0.8125` at three
/// digits reads `0.813` rather than the round-half-even `0.812`.
pub fn to_fixed(value: f64, digits: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scale = 10f64.powi(i32::from(digits));
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.prec$}", prec = usize::from(digits))
}
