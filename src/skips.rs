//! Skips
//!
//! The [`Skip`] value object mirrors the vendor API's wire shape. A skip is
//! immutable once fetched; everything downstream (filtering, pricing,
//! booking) works on borrowed or cloned values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A waste container unit available for hire, the core sellable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    /// Unique identifier assigned by the vendor.
    pub id: u64,

    /// Capacity in cubic yards.
    pub size: u32,

    /// Rental duration in days.
    pub hire_period_days: u32,

    /// Pre-tax price.
    pub price_before_vat: Decimal,

    /// VAT percentage, e.g. `20` for 20%.
    pub vat: Decimal,

    /// Postcode the skip is serviceable from.
    pub postcode: String,

    /// Area within the postcode, may be empty.
    #[serde(default)]
    pub area: String,

    /// Excluded from booking regardless of other attributes.
    pub forbidden: bool,

    /// Whether the skip may be placed on a public road or pavement.
    pub allowed_on_road: bool,

    /// Whether heavy waste (rubble, soil, concrete) is permitted.
    pub allows_heavy_waste: bool,

    /// Extra transport charge, if any.
    #[serde(default)]
    pub transport_cost: Option<Decimal>,

    /// Per-tonne charge for heavy waste, if any.
    #[serde(default)]
    pub per_tonne_cost: Option<Decimal>,

    /// Display name; derived from the size when the API omits it.
    #[serde(default)]
    pub name: Option<String>,

    /// Display description.
    #[serde(default)]
    pub description: Option<String>,

    /// Physical dimensions, display-only.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,

    /// Product image, display-only.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Physical dimensions of a skip in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in metres.
    pub length: Decimal,
    /// Width in metres.
    pub width: Decimal,
    /// Height in metres.
    pub height: Decimal,
}

impl Skip {
    /// Whether the skip satisfies the required-field invariants
    /// (`id > 0`, `size > 0`, non-negative price and VAT).
    ///
    /// Records failing this gate are excluded from filtering output
    /// unconditionally.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id > 0
            && self.size > 0
            && self.price_before_vat >= Decimal::ZERO
            && self.vat >= Decimal::ZERO
    }

    /// Whether the skip may be offered for booking.
    ///
    /// A forbidden skip must never be presented as selectable, even if it
    /// matches every active filter.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.forbidden
    }

    /// The display name, falling back to `"{size} Yard Skip"` when the API
    /// did not supply one.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} Yard Skip", self.size))
    }
}

/// Returns the subset of `skips` that may be offered for booking,
/// preserving order.
///
/// The filtering engine itself does not consult [`Skip::forbidden`];
/// presentation layers apply this before showing results.
#[must_use]
pub fn selectable_skips(skips: &[Skip]) -> Vec<&Skip> {
    skips.iter().filter(|skip| skip.is_selectable()).collect()
}
