//! Forgiving numeric parsing for form inputs.
//!
//! Accepts plain numbers, thousands separators, a leading dollar sign, and
//! K/M magnitude suffixes ("13.6K", "1.2M"). Anything unparseable clamps to
//! zero; the evaluators treat zero as "not entered" and degrade gracefully.

/// Parses a free-text amount, returning 0.0 for empty or malformed input.
/// Negative values pass through so the evaluators can reject them explicitly.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_' && !ch.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    let (number, multiplier) = match cleaned.chars().last() {
        Some('k') | Some('K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m') | Some('M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    number.parse::<f64>().map(|v| v * multiplier).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_amount("30000"), 30_000.0);
        assert_eq!(parse_amount("  600.50 "), 600.5);
        assert_eq!(parse_amount("-5"), -5.0);
    }

    #[test]
    fn magnitude_suffixes() {
        assert_eq!(parse_amount("13.6K"), 13_600.0);
        assert_eq!(parse_amount("75k"), 75_000.0);
        assert_eq!(parse_amount("1.2M"), 1_200_000.0);
    }

    #[test]
    fn separators_and_currency_signs() {
        assert_eq!(parse_amount("30,000"), 30_000.0);
        assert_eq!(parse_amount("$1,250.75"), 1_250.75);
    }

    #[test]
    fn garbage_clamps_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("a lot"), 0.0);
        assert_eq!(parse_amount("12x"), 0.0);
        assert_eq!(parse_amount("K"), 0.0);
    }
}
