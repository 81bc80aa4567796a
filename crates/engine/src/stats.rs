//! Dashboard statistics — converting per-token open-position totals into a
//! single USDC-denominated figure.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Reference currency all position totals are converted into.
pub const REFERENCE_TOKEN: &str = "USDC";

/// Convert per-token totals to a USDC sum using the given spot prices.
///
/// Tokens without a quote are skipped with a warning rather than failing the
/// whole aggregation. USDC amounts are taken at face value; everything else
/// is multiplied by its USDC price.
pub fn total_in_usdc(
    token_amounts: &HashMap<String, Decimal>,
    prices: &HashMap<String, Decimal>,
) -> Decimal {
    let mut total = Decimal::ZERO;

    for (token, amount) in token_amounts {
        if !prices.contains_key(token.as_str()) || !prices.contains_key(REFERENCE_TOKEN) {
            tracing::warn!(token, "No price data available");
            continue;
        }

        if token == REFERENCE_TOKEN {
            total += *amount;
            continue;
        }

        total += *amount * prices[token.as_str()];
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn map(entries: &[(&str, Decimal)]) -> HashMap<String, Decimal> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn empty_positions_total_zero() {
        let total = total_in_usdc(&HashMap::new(), &map(&[("USDC", dec!(1))]));
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn usdc_amounts_pass_through() {
        let amounts = map(&[("USDC", dec!(150.5))]);
        let prices = map(&[("USDC", dec!(1))]);
        assert_eq!(total_in_usdc(&amounts, &prices), dec!(150.5));
    }

    #[test]
    fn other_tokens_converted_at_spot() {
        let amounts = map(&[("ETH", dec!(2)), ("USDC", dec!(100))]);
        let prices = map(&[("ETH", dec!(3000)), ("USDC", dec!(1))]);
        assert_eq!(total_in_usdc(&amounts, &prices), dec!(6100));
    }

    #[test]
    fn unquoted_tokens_skipped() {
        let amounts = map(&[("ETH", dec!(2)), ("WOBBLE", dec!(9999))]);
        let prices = map(&[("ETH", dec!(3000)), ("USDC", dec!(1))]);
        assert_eq!(total_in_usdc(&amounts, &prices), dec!(6000));
    }

    #[test]
    fn missing_reference_quote_skips_everything() {
        let amounts = map(&[("ETH", dec!(2)), ("USDC", dec!(100))]);
        let prices = map(&[("ETH", dec!(3000))]);
        assert_eq!(total_in_usdc(&amounts, &prices), Decimal::ZERO);
    }
}
