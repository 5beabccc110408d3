//! Skipsearch
//!
//! Skipsearch is the search, filtering, pricing and booking core of a
//! skip-hire service: a typed client for the vendor's location API with
//! postcode-variation fallback, bounded retry and a freshness-windowed
//! query cache; a pure faceted filtering engine; exact VAT arithmetic;
//! a result-state classifier for view layers; and an in-memory cart
//! built from completed booking drafts.

pub mod cart;
pub mod client;
pub mod filters;
pub mod fixtures;
pub mod prelude;
pub mod presentation;
pub mod pricing;
pub mod search;
pub mod skips;
