//! Parsing of money amounts typed into forms.

/// Parse `text` as an amount of money that must be greater than zero.
///
/// Surrounding whitespace is ignored. Returns `None` if `text` is not a
/// number, is not finite (e.g., "inf", "NaN" or a value too large for an
/// `f64`), or is zero or negative. Decimal commas, e.g. "4,50", are not
/// accepted.
pub fn parse_positive_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
