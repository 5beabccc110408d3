//! Fixtures
//!
//! Deterministic sample skips shared by unit and integration tests.

use rust_decimal::Decimal;

use crate::skips::Skip;

/// A valid, road-legal skip with a 20% VAT rate and a 14-day hire period.
#[must_use]
pub fn skip(id: u64, size: u32, price_before_vat: u32) -> Skip {
    Skip {
        id,
        size,
        hire_period_days: 14,
        price_before_vat: Decimal::from(price_before_vat),
        vat: Decimal::from(20),
        postcode: "NR32".to_owned(),
        area: String::new(),
        forbidden: false,
        allowed_on_road: true,
        allows_heavy_waste: true,
        transport_cost: None,
        per_tonne_cost: None,
        name: None,
        description: None,
        dimensions: None,
        image_url: None,
    }
}

/// A skip per requested size, ids counting from 1, priced at £30 per yard.
#[must_use]
pub fn skips(sizes: &[u32]) -> Vec<Skip> {
    (1u64..)
        .zip(sizes)
        .map(|(id, &size)| skip(id, size, size * 30))
        .collect()
}
