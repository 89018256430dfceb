//! Money formatting for replies.

use super::price::{Currency, PriceObservation};

/// Format an amount with two decimals and comma-grouped thousands.
///
/// `65000.5` becomes `65,000.50`. Non-finite values are printed as-is.
#[must_use]
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would read oddly; only sign amounts that survive rounding.
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    format!("{sign}{grouped}.{frac_part}")
}

/// Render an observation as `$<usd> | ₽<rub>`.
///
/// Missing currencies are shown as zero.
#[must_use]
pub fn format_observation(observation: &PriceObservation) -> String {
    Currency::ALL
        .iter()
        .map(|&currency| {
            format!(
                "{}{}",
                currency.sign(),
                format_money(observation.amount_or_zero(currency))
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
