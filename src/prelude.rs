//! Skipsearch prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        BookingDraft, BookingError, Cart, CartItem, CustomerDetails, Placement, WasteType,
        permit_required,
    },
    client::{
        ClientConfig, FetchError, HttpTransport, InMemoryCache, RetryPolicy, SkipCache,
        SkipClient, SkipTransport,
    },
    filters::{
        DEFAULT_FILTERS, PriceRange, RoadLegal, SearchFilters, SizeRange, filter_skips,
    },
    presentation::{ResultState, classify_result_state},
    pricing::{PRICE_UNAVAILABLE, format_price, total_price},
    search::{MIN_POSTCODE_LEN, QueryKey, SearchParams, area_variations},
    skips::{Dimensions, Skip, selectable_skips},
};
