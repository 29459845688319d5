use rust_decimal::Decimal;

/// Formats a signed amount as `$1,234.56`, with the sign decided on the
/// value after rounding to two decimals. An amount like -0.001 rounds to
/// zero and comes out as `$0.00`, never `-$0.00`.
pub fn format_dollar_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let absolute = format!("${}", group_thousands(&format!("{:.2}", rounded.abs())));
    if rounded < Decimal::ZERO {
        format!("-{}", absolute)
    } else {
        absolute
    }
}

/// Thousands-separated rendering of a whole-dollar value, no decimals and
/// no currency symbol (`12345` -> `12,345`).
pub fn format_whole_dollars(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_thousands(&value.unsigned_abs().to_string()))
    } else {
        group_thousands(&value.to_string())
    }
}

fn group_thousands(raw: &str) -> String {
    let (integer_part, fraction_part) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw, None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer_part.len() / 3);
    for (i, digit) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction_part {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}
