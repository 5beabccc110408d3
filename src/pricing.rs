//! Pricing
//!
//! VAT-inclusive totals over exact decimal arithmetic. No rounding happens
//! here; currency rounding and formatting are applied only at presentation
//! time via [`format_price`].

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Sentinel shown in place of a price that cannot be computed or formatted.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Calculates the VAT-inclusive total: `price * (1 + vat / 100)`.
///
/// Returns `None` when the result is unrepresentable (decimal overflow);
/// callers treat that as "unavailable" rather than an error. Never panics.
#[must_use]
pub fn total_price(price_before_vat: Decimal, vat_percent: Decimal) -> Option<Decimal> {
    let multiplier = vat_percent
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_add(Decimal::ONE)?;

    price_before_vat.checked_mul(multiplier)
}

/// Formats the VAT-inclusive total as a GBP money string, e.g. `"£420.00"`.
///
/// Negative inputs and unrepresentable totals produce the
/// [`PRICE_UNAVAILABLE`] sentinel instead of an error.
#[must_use]
pub fn format_price(price_before_vat: Decimal, vat_percent: Decimal) -> String {
    if price_before_vat < Decimal::ZERO || vat_percent < Decimal::ZERO {
        return PRICE_UNAVAILABLE.to_owned();
    }

    total_price(price_before_vat, vat_percent).map_or_else(
        || PRICE_UNAVAILABLE.to_owned(),
        |total| Money::from_decimal(total.round_dp(2), iso::GBP).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_price_applies_vat() {
        let total = total_price(Decimal::from(350), Decimal::from(20));

        assert_eq!(total, Some(Decimal::from(420)));
    }

    #[test]
    fn zero_vat_is_identity() {
        let price = Decimal::new(27850, 2);

        assert_eq!(total_price(price, Decimal::ZERO), Some(price));
    }

    #[test]
    fn total_is_never_below_the_pre_vat_price() {
        let prices = [Decimal::ZERO, Decimal::ONE, Decimal::from(278)];
        let vats = [Decimal::ZERO, Decimal::from(5), Decimal::from(20)];

        for price in prices {
            for vat in vats {
                let total = total_price(price, vat);
                assert!(
                    total.is_some_and(|total| total >= price),
                    "total for {price} at {vat}% fell below the net price"
                );
            }
        }
    }

    #[test]
    fn overflow_is_unavailable_not_a_panic() {
        assert_eq!(total_price(Decimal::MAX, Decimal::from(20)), None);
    }

    #[test]
    fn formats_as_gbp() {
        assert_eq!(
            format_price(Decimal::from(350), Decimal::from(20)),
            "£420.00"
        );
    }

    #[test]
    fn negative_inputs_format_as_unavailable() {
        assert_eq!(
            format_price(Decimal::from(-1), Decimal::from(20)),
            PRICE_UNAVAILABLE
        );
        assert_eq!(
            format_price(Decimal::from(100), Decimal::from(-5)),
            PRICE_UNAVAILABLE
        );
    }
}
