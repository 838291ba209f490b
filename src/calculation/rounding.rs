//! Currency rounding.
//!
//! Every monetary line item in a liquidation is rounded half away from zero:
//! contributions and overtime to whole pesos, benefit accruals to cents.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on contribution and overtime amounts.
pub const PESO_DECIMALS: u32 = 0;

/// Decimal places kept on benefit accruals.
pub const CENT_DECIMALS: u32 = 2;

/// Rounds `value` to `decimals` places, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::round_half_away;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_away(Decimal::from_str("2.5").unwrap(), 0), Decimal::from(3));
/// assert_eq!(round_half_away(Decimal::from_str("-2.5").unwrap(), 0), Decimal::from(-3));
/// ```
pub fn round_half_away(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up_to_whole_peso() {
        assert_eq!(round_half_away(dec("6786.5"), PESO_DECIMALS), dec("6787"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_half_away(dec("6786.49"), PESO_DECIMALS), dec("6786"));
    }

    #[test]
    fn test_cent_midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_away(dec("266666.665"), CENT_DECIMALS), dec("266666.67"));
        assert_eq!(round_half_away(dec("-0.125"), CENT_DECIMALS), dec("-0.13"));
    }

    #[test]
    fn test_already_rounded_value_is_unchanged() {
        assert_eq!(round_half_away(dec("1105000"), PESO_DECIMALS), dec("1105000"));
        assert_eq!(round_half_away(dec("125000.00"), CENT_DECIMALS), dec("125000"));
    }
}
