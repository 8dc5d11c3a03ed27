//! Marginal-rate evaluation over an ordered bracket sequence.

use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::models::TaxBracket;

/// Total tax owed on `taxable_income` under `brackets`.
///
/// Each bracket taxes `min(taxable, upper) - lower` at its own rate.
/// Evaluation stops at the first bracket whose lower bound is at or above
/// the taxable amount, so income exactly on an edge is taxed at the rate
/// of the bracket below it. `brackets` must be contiguous and sorted; the
/// caller guarantees `taxable_income >= 0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::TaxBracket;
/// use budget_core::calculations::brackets::bracket_tax;
///
/// let brackets = vec![
///     TaxBracket::bounded(dec!(0), dec!(11000), dec!(0.10)),
///     TaxBracket::bounded(dec!(11000), dec!(44725), dec!(0.12)),
///     TaxBracket::unbounded(dec!(44725), dec!(0.22)),
/// ];
///
/// assert_eq!(bracket_tax(&brackets, dec!(35400)), dec!(4028.00));
/// ```
pub fn bracket_tax(
    brackets: &[TaxBracket],
    taxable_income: Decimal,
) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if taxable_income <= bracket.min_income {
            break;
        }
        let in_bracket = max(
            bracket.max_income.clamp(taxable_income) - bracket.min_income,
            Decimal::ZERO,
        );
        tax += in_bracket * bracket.tax_rate;
    }

    tax
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::PolicyTables;

    fn federal_single() -> Vec<TaxBracket> {
        PolicyTables::default().federal_single.brackets().to_vec()
    }

    fn state() -> Vec<TaxBracket> {
        PolicyTables::default().state.brackets().to_vec()
    }

    #[test]
    fn zero_income_owes_nothing() {
        assert_eq!(bracket_tax(&federal_single(), dec!(0)), dec!(0));
    }

    #[test]
    fn empty_schedule_owes_nothing() {
        assert_eq!(bracket_tax(&[], dec!(50000)), dec!(0));
    }

    #[test]
    fn income_inside_first_bracket() {
        assert_eq!(bracket_tax(&federal_single(), dec!(5000)), dec!(500));
    }

    #[test]
    fn income_exactly_on_boundary_uses_lower_rate() {
        // 11000 is the top of the 10% bracket
        assert_eq!(bracket_tax(&federal_single(), dec!(11000)), dec!(1100));
    }

    #[test]
    fn first_dollar_past_boundary_uses_next_rate() {
        assert_eq!(bracket_tax(&federal_single(), dec!(11001)), dec!(1100.12));
    }

    #[test]
    fn one_unit_of_taxable_income_uses_lowest_rate() {
        assert_eq!(bracket_tax(&federal_single(), dec!(1)), dec!(0.10));
        assert_eq!(bracket_tax(&state(), dec!(1)), dec!(0.01));
    }

    #[test]
    fn federal_single_at_35400() {
        assert_eq!(bracket_tax(&federal_single(), dec!(35400)), dec!(4028));
    }

    #[test]
    fn state_schedule_spans_four_brackets() {
        // 107.56 + 294.86 + 589.84 + 252.90
        assert_eq!(bracket_tax(&state(), dec!(44460)), dec!(1245.16));
    }

    #[test]
    fn top_bracket_is_unbounded() {
        // Every federal single bracket below 578125 is full:
        // 1100 + 4047 + 11143 + 20802 + 15744 + 121406.25 = 174242.25
        let tax = bracket_tax(&federal_single(), dec!(678125));

        assert_eq!(tax, dec!(174242.25) + dec!(37000));
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (0i64..200_000_000i64).prop_map(|c| Decimal::new(c, 2))
    }

    proptest! {
        #[test]
        fn tax_is_monotonic(a in cents(), b in cents()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let brackets = federal_single();

            prop_assert!(bracket_tax(&brackets, lo) <= bracket_tax(&brackets, hi));
        }

        #[test]
        fn marginal_step_never_exceeds_top_rate(t in cents()) {
            let brackets = state();
            let step = bracket_tax(&brackets, t + Decimal::ONE) - bracket_tax(&brackets, t);

            prop_assert!(step >= Decimal::ZERO);
            prop_assert!(step <= dec!(0.133));
        }
    }
}
