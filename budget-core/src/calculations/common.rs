//! Shared arithmetic for the budget calculations.
//!
//! Intermediate values stay at full precision; [`round_half_up`] is only
//! applied where results leave the engine.

use rust_decimal::Decimal;

/// Rounds a value to two decimal places, midpoints away from zero.
///
/// The result always carries a scale of two, so `4028` becomes `4028.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4333.3333)), dec!(4333.33));
/// assert_eq!(round_half_up(dec!(1019.425)), dec!(1019.43));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Income left after subtracting a deduction, floored at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::taxable_income;
///
/// assert_eq!(taxable_income(dec!(50000), dec!(14600)), dec!(35400));
/// assert_eq!(taxable_income(dec!(10000), dec!(14600)), dec!(0));
/// ```
pub fn taxable_income(
    gross: Decimal,
    deduction: Decimal,
) -> Decimal {
    max(gross - deduction, Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(3398.074)), dec!(3398.07));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(815.535)), dec!(815.54));
    }

    #[test]
    fn round_half_up_keeps_whole_amounts() {
        let rounded = round_half_up(dec!(4028));

        assert_eq!(rounded, dec!(4028.00));
        assert_eq!(rounded.to_string(), "4028.00");
    }

    #[test]
    fn round_half_up_handles_long_fractions() {
        assert_eq!(
            round_half_up(dec!(4333.3333333333333333333333333)),
            dec!(4333.33)
        );
    }

    #[test]
    fn max_prefers_larger_value() {
        assert_eq!(max(dec!(-5), dec!(0)), dec!(0));
        assert_eq!(max(dec!(7), dec!(3)), dec!(7));
    }

    #[test]
    fn taxable_income_at_deduction_is_zero() {
        assert_eq!(taxable_income(dec!(14600), dec!(14600)), dec!(0));
    }

    #[test]
    fn taxable_income_one_unit_above_deduction() {
        assert_eq!(taxable_income(dec!(14601), dec!(14600)), dec!(1));
    }
}
