//! Common decimal helpers for proceeds calculations.
//!
//! Engine arithmetic saturates at the edge of the decimal range instead of
//! panicking, and rounding is only ever applied by presentation code.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// One hundred, the divisor that turns a percent into a fraction.
pub const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Returns `rate` percent of `base`, i.e. `rate / 100 * base`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proceeds_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(3.0), dec!(525000)), dec!(15750));
/// assert_eq!(percent_of(dec!(2.5), dec!(0)), dec!(0));
/// ```
pub fn percent_of(
    rate: Decimal,
    base: Decimal,
) -> Decimal {
    (rate / ONE_HUNDRED).saturating_mul(base)
}

/// Adds every value, saturating at the decimal bounds.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Replaces a zero denominator with one.
///
/// Ratio displays divide by the sale or purchase price, either of which may
/// still be blank while the user is typing.
pub fn safe_denominator(value: Decimal) -> Decimal {
    if value.is_zero() { Decimal::ONE } else { value }
}

/// Returns `numerator / denominator * 100`, using [`safe_denominator`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proceeds_core::calculations::common::ratio_percent;
///
/// assert_eq!(ratio_percent(dec!(25), dec!(200)), dec!(12.5));
/// assert_eq!(ratio_percent(dec!(25), dec!(0)), dec!(2500));
/// ```
pub fn ratio_percent(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    numerator
        .checked_div(safe_denominator(denominator))
        .map(|ratio| ratio.saturating_mul(ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Converts a loosely typed number, treating absent, NaN, infinite and
/// out-of-range values as zero.
pub fn coerce_f64(value: Option<f64>) -> Decimal {
    value
        .filter(|v| v.is_finite())
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

/// Rounds a decimal value to `dp` places using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proceeds_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(204223.5), 0), dec!(204224));
/// assert_eq!(round_half_up(dec!(-123.455), 2), dec!(-123.46));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_scales_base() {
        assert_eq!(percent_of(dec!(2.5), dec!(525000)), dec!(13125));
    }

    #[test]
    fn percent_of_zero_base_is_zero() {
        assert_eq!(percent_of(dec!(3.0), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percent_of_saturates_instead_of_overflowing() {
        assert_eq!(percent_of(Decimal::MAX, Decimal::MAX), Decimal::MAX);
    }

    // =========================================================================
    // saturating_sum tests
    // =========================================================================

    #[test]
    fn saturating_sum_adds_values() {
        assert_eq!(saturating_sum([dec!(1450), dec!(450), dec!(7875)]), dec!(9775));
    }

    #[test]
    fn saturating_sum_of_nothing_is_zero() {
        assert_eq!(saturating_sum([]), Decimal::ZERO);
    }

    #[test]
    fn saturating_sum_clamps_at_max() {
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
    }

    // =========================================================================
    // ratio tests
    // =========================================================================

    #[test]
    fn safe_denominator_replaces_zero_only() {
        assert_eq!(safe_denominator(Decimal::ZERO), Decimal::ONE);
        assert_eq!(safe_denominator(dec!(385000)), dec!(385000));
    }

    #[test]
    fn ratio_percent_divides_and_scales() {
        assert_eq!(ratio_percent(dec!(140000), dec!(400000)), dec!(35));
    }

    #[test]
    fn ratio_percent_with_zero_denominator_uses_one() {
        assert_eq!(ratio_percent(dec!(-500), Decimal::ZERO), dec!(-50000));
    }

    // =========================================================================
    // coerce_f64 tests
    // =========================================================================

    #[test]
    fn coerce_f64_passes_finite_values() {
        assert_eq!(coerce_f64(Some(1.5)), dec!(1.5));
        assert_eq!(coerce_f64(Some(525000.0)), dec!(525000));
    }

    #[test]
    fn coerce_f64_zeroes_missing_and_non_finite() {
        assert_eq!(coerce_f64(None), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(f64::NAN)), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(f64::NEG_INFINITY)), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(1e300)), Decimal::ZERO);
    }

    // =========================================================================
    // round_half_up / max tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
    }

    #[test]
    fn round_half_up_to_whole_units() {
        assert_eq!(round_half_up(dec!(196349.5), 0), dec!(196350));
        assert_eq!(round_half_up(dec!(196349.49), 0), dec!(196349));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-0.05), 1), dec!(-0.1));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(-50.00), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }
}
