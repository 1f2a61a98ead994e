//! Numeric parsing for EPP amount fields.

/// Parse a dot-separated decimal amount.
///
/// Unparseable input yields `0.0`, and so do non-finite values (`inf`,
/// `NaN`, overflow) which JSON cannot represent. Decimal commas are not
/// recognised: `"12,50"` parses to `0.0`.
pub fn parse_amount(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}
