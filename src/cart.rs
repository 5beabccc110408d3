//! Cart & bookings
//!
//! The wizard accumulates a [`BookingDraft`] step by step; only a draft
//! with every required field present converts into a [`CartItem`], so a
//! partially built booking can never reach the cart. The cart itself is an
//! ordered in-memory collection, not persisted across sessions.

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{pricing, skips::Skip};

/// Contact and address details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
}

/// Category of waste going into the skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    /// Household and commercial waste.
    General,
    /// Building materials, rubble, concrete.
    Construction,
    /// Grass, leaves, branches, soil.
    Garden,
    /// Combination of different waste types.
    Mixed,
}

impl WasteType {
    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::General => "General Waste",
            Self::Construction => "Construction Waste",
            Self::Garden => "Garden Waste",
            Self::Mixed => "Mixed Waste",
        }
    }
}

/// Where the skip will stand during the hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Public road, pavement or council-owned land.
    Road,
    /// Driveway, garden or other private property.
    PrivateProperty,
}

/// Whether a council permit is needed for the given placement.
///
/// A permit is required whenever the skip stands on public land; private
/// property never needs one.
#[must_use]
pub fn permit_required(placement: Placement) -> bool {
    matches!(placement, Placement::Road)
}

/// Why a draft could not be converted into a cart item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// No skip has been selected yet.
    #[error("no skip selected")]
    MissingSkip,

    /// The selected skip is excluded from booking.
    #[error("the selected skip is not available for booking")]
    ForbiddenSkip,

    /// No delivery date has been chosen.
    #[error("no delivery date chosen")]
    MissingDeliveryDate,

    /// Customer details have not been captured.
    #[error("customer details missing")]
    MissingCustomerDetails,

    /// No waste category has been chosen.
    #[error("no waste type chosen")]
    MissingWasteType,

    /// No payment method has been chosen.
    #[error("no payment method chosen")]
    MissingPaymentMethod,
}

/// The in-progress booking a wizard accumulates across its steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Postcode entered in the first step.
    pub postcode: String,

    /// Optional area refinement.
    pub area: Option<String>,

    /// Selected waste category.
    pub waste_type: Option<WasteType>,

    /// Skip chosen from the search results.
    pub selected_skip: Option<Skip>,

    /// Where the skip will stand.
    pub placement: Option<Placement>,

    /// Permit reference or notes, when a permit is required.
    pub permit_details: Option<String>,

    /// Chosen delivery date.
    pub delivery_date: Option<Date>,

    /// Optional collection date.
    pub collection_date: Option<Date>,

    /// Checkout contact details.
    pub customer: Option<CustomerDetails>,

    /// Chosen payment method label. Payment itself is out of scope.
    pub payment_method: Option<String>,
}

impl BookingDraft {
    /// Whether this draft needs a permit, given its placement.
    #[must_use]
    pub fn needs_permit(&self) -> bool {
        self.placement.is_some_and(permit_required)
    }

    /// Converts a completed draft into a [`CartItem`].
    ///
    /// # Errors
    ///
    /// Returns the first missing requirement: a selected (and selectable)
    /// skip, a delivery date, customer details, a waste type and a payment
    /// method must all be present.
    pub fn into_cart_item(self) -> Result<CartItem, BookingError> {
        let skip = self.selected_skip.ok_or(BookingError::MissingSkip)?;
        if !skip.is_selectable() {
            return Err(BookingError::ForbiddenSkip);
        }

        let delivery_date = self
            .delivery_date
            .ok_or(BookingError::MissingDeliveryDate)?;
        let customer = self
            .customer
            .ok_or(BookingError::MissingCustomerDetails)?;
        let waste_type = self.waste_type.ok_or(BookingError::MissingWasteType)?;
        let payment_method = self
            .payment_method
            .ok_or(BookingError::MissingPaymentMethod)?;

        Ok(CartItem {
            uuid: Uuid::new_v4(),
            skip_size: skip.size,
            hire_period_days: skip.hire_period_days,
            price_before_vat: skip.price_before_vat,
            vat: skip.vat,
            delivery_date,
            collection_date: self.collection_date,
            postcode: self.postcode,
            waste_type,
            customer,
            payment_method,
            added_at: Timestamp::now(),
        })
    }
}

/// A completed booking held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Identity of this cart entry.
    pub uuid: Uuid,

    /// Booked skip size in cubic yards.
    pub skip_size: u32,

    /// Hire period in days.
    pub hire_period_days: u32,

    /// Pre-tax price at the time of booking.
    pub price_before_vat: Decimal,

    /// VAT percentage at the time of booking.
    pub vat: Decimal,

    /// Agreed delivery date.
    pub delivery_date: Date,

    /// Agreed collection date, if chosen.
    pub collection_date: Option<Date>,

    /// Delivery postcode.
    pub postcode: String,

    /// Waste category.
    pub waste_type: WasteType,

    /// Checkout contact details.
    pub customer: CustomerDetails,

    /// Payment method label.
    pub payment_method: String,

    /// When the item was added to the cart.
    pub added_at: Timestamp,
}

impl CartItem {
    /// VAT-inclusive total for this item; `None` if unrepresentable.
    #[must_use]
    pub fn total_price(&self) -> Option<Decimal> {
        pricing::total_price(self.price_before_vat, self.vat)
    }
}

/// Ordered in-memory collection of completed bookings.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, preserving insertion order.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Removes the item with the given identity. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, uuid: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.uuid != uuid);
        self.items.len() != before
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the VAT-inclusive totals of all items; `None` if any item's
    /// total is unrepresentable.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| {
                item.total_price().and_then(|total| acc.checked_add(total))
            })
    }
}
