//! Free-text numeric input parsing.

/// Parse a learner-entered numeric string.
///
/// Accepts both regional decimal notations ("3.14" and "3,14") and
/// whitespace as a thousands separator ("1 000", "1 234,5"). Scientific
/// notation passes through ("1e3"). Returns `None` for empty input, for
/// anything the cleaned string does not fully parse as, and for
/// non-finite values.
///
/// Only the first comma is treated as a decimal mark; question banks are
/// authored with a single regional convention in mind, so inputs with
/// several commas simply fail to parse.
pub fn parse_numeric_input(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
