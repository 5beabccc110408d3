//! Filtering engine
//!
//! Pure, composable facet predicates over an in-memory skip list. Each
//! facet is an exhaustive enum with its own `matches` method; the engine
//! runs them as an ordered predicate list so adding a facet is a one-line
//! change with compiler-enforced exhaustiveness.
//!
//! Filtering preserves input order, never mutates its input, and never
//! errors: unknown facet strings parse to the all-inclusive variant and
//! behave as "no constraint". The engine does not consult
//! [`Skip::forbidden`]; see [`crate::skips::selectable_skips`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{pricing, skips::Skip};

/// One independent filter dimension over skip size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeRange {
    /// No size constraint.
    #[default]
    All,
    /// Up to 4 yards.
    Small,
    /// 6 to 8 yards.
    Medium,
    /// 10 to 12 yards.
    Large,
    /// 14 yards and up.
    Xlarge,
}

impl SizeRange {
    /// Parses a facet value leniently; unknown input means no constraint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "xlarge" => Self::Xlarge,
            _ => Self::All,
        }
    }

    /// Whether a skip of `size` cubic yards falls in this bucket.
    ///
    /// Sizes 5, 9 and 13 fall between buckets and match only [`Self::All`].
    #[must_use]
    pub fn matches(self, size: u32) -> bool {
        match self {
            Self::All => true,
            Self::Small => size <= 4,
            Self::Medium => (6..=8).contains(&size),
            Self::Large => (10..=12).contains(&size),
            Self::Xlarge => size >= 14,
        }
    }
}

/// Price facet, bucketed on the VAT-inclusive total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    /// No price constraint.
    #[default]
    All,
    /// Total below £200.
    Budget,
    /// Total from £200 up to but excluding £400.
    Mid,
    /// Total of £400 or more.
    Premium,
}

impl PriceRange {
    /// Parses a facet value leniently; unknown input means no constraint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "budget" => Self::Budget,
            "mid" => Self::Mid,
            "premium" => Self::Premium,
            _ => Self::All,
        }
    }

    /// Whether a VAT-inclusive total falls in this bucket.
    ///
    /// An unavailable total matches only [`Self::All`].
    #[must_use]
    pub fn matches(self, total: Option<Decimal>) -> bool {
        let Some(total) = total else {
            return self == Self::All;
        };

        let mid_floor = Decimal::from(200);
        let premium_floor = Decimal::from(400);

        match self {
            Self::All => true,
            Self::Budget => total < mid_floor,
            Self::Mid => total >= mid_floor && total < premium_floor,
            Self::Premium => total >= premium_floor,
        }
    }
}

/// Road-placement facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadLegal {
    /// No placement constraint.
    #[default]
    All,
    /// Only skips allowed on public road/pavement.
    Road,
    /// Only skips restricted to private property.
    Private,
}

impl RoadLegal {
    /// Parses a facet value leniently; unknown input means no constraint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "road" => Self::Road,
            "private" => Self::Private,
            _ => Self::All,
        }
    }

    /// Whether a skip with the given road permission matches.
    #[must_use]
    pub fn matches(self, allowed_on_road: bool) -> bool {
        match self {
            Self::All => true,
            Self::Road => allowed_on_road,
            Self::Private => !allowed_on_road,
        }
    }
}

/// The active facet set. Mutated incrementally by the caller; the
/// all-inclusive default is [`DEFAULT_FILTERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Case-insensitive free-text term; empty means no constraint.
    #[serde(default)]
    pub search_term: String,

    /// Size bucket facet.
    #[serde(default)]
    pub size_range: SizeRange,

    /// Price bucket facet.
    #[serde(default)]
    pub price_range: PriceRange,

    /// Road-placement facet.
    #[serde(default)]
    pub road_legal: RoadLegal,
}

/// The single all-inclusive filter set: every facet passes everything.
pub const DEFAULT_FILTERS: SearchFilters = SearchFilters {
    search_term: String::new(),
    size_range: SizeRange::All,
    price_range: PriceRange::All,
    road_legal: RoadLegal::All,
};

impl Default for SearchFilters {
    fn default() -> Self {
        DEFAULT_FILTERS
    }
}

impl SearchFilters {
    /// Whether any facet constrains the result set, for "showing N of M"
    /// affordances.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.size_range != SizeRange::All
            || self.price_range != PriceRange::All
            || self.road_legal != RoadLegal::All
    }
}

/// Applies the active facets to `skips`, returning the matching subset in
/// the original order.
///
/// Skips failing the required-field validity gate are excluded regardless
/// of the active facets. The input is never mutated.
#[must_use]
pub fn filter_skips(skips: &[Skip], filters: &SearchFilters) -> Vec<Skip> {
    let term = filters.search_term.trim().to_lowercase();

    skips
        .iter()
        .filter(|skip| passes(skip, filters, &term))
        .cloned()
        .collect()
}

fn passes(skip: &Skip, filters: &SearchFilters, term: &str) -> bool {
    if !skip.is_valid() {
        return false;
    }

    // One predicate per facet, applied in declaration order.
    let facets: [&dyn Fn(&Skip) -> bool; 4] = [
        &|skip| term.is_empty() || matches_search_term(skip, term),
        &|skip| filters.size_range.matches(skip.size),
        &|skip| {
            filters
                .price_range
                .matches(pricing::total_price(skip.price_before_vat, skip.vat))
        },
        &|skip| filters.road_legal.matches(skip.allowed_on_road),
    ];

    facets.iter().all(|facet| facet(skip))
}

fn matches_search_term(skip: &Skip, term: &str) -> bool {
    if skip.size.to_string().contains(term) || skip.hire_period_days.to_string().contains(term) {
        return true;
    }

    if let Some(total) = pricing::total_price(skip.price_before_vat, skip.vat) {
        if format!("{total:.2}").contains(term) {
            return true;
        }
    }

    road_phrase(skip.allowed_on_road).contains(term)
}

const fn road_phrase(allowed_on_road: bool) -> &'static str {
    if allowed_on_road {
        "road legal"
    } else {
        "private property"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn size_bucket_boundaries() {
        assert!(SizeRange::Small.matches(4));
        assert!(!SizeRange::Medium.matches(4));
        assert!(SizeRange::Medium.matches(6));
        assert!(SizeRange::Large.matches(12));
        assert!(!SizeRange::Xlarge.matches(12));
        assert!(SizeRange::Xlarge.matches(14));
    }

    #[test]
    fn sizes_in_bucket_gaps_match_only_all() {
        for size in [5, 9, 13] {
            assert!(SizeRange::All.matches(size), "All must match size {size}");
            for bucket in [
                SizeRange::Small,
                SizeRange::Medium,
                SizeRange::Large,
                SizeRange::Xlarge,
            ] {
                assert!(
                    !bucket.matches(size),
                    "size {size} unexpectedly matched {bucket:?}"
                );
            }
        }
    }

    #[test]
    fn price_bucket_boundaries_are_half_open() {
        let exactly_200 = Some(Decimal::from(200));
        let exactly_400 = Some(Decimal::from(400));

        assert!(!PriceRange::Budget.matches(exactly_200));
        assert!(PriceRange::Mid.matches(exactly_200));
        assert!(!PriceRange::Mid.matches(exactly_400));
        assert!(PriceRange::Premium.matches(exactly_400));
    }

    #[test]
    fn unavailable_total_matches_only_all() {
        assert!(PriceRange::All.matches(None));
        assert!(!PriceRange::Budget.matches(None));
        assert!(!PriceRange::Mid.matches(None));
        assert!(!PriceRange::Premium.matches(None));
    }

    #[test]
    fn unknown_facet_values_parse_as_no_constraint() {
        assert_eq!(SizeRange::parse("gigantic"), SizeRange::All);
        assert_eq!(PriceRange::parse(""), PriceRange::All);
        assert_eq!(RoadLegal::parse("sidewalk"), RoadLegal::All);
    }

    #[test]
    fn search_term_matches_price_and_phrases() {
        // 180 + 20% VAT = 216.00
        let mut skip = fixtures::skip(1, 8, 180);
        skip.allowed_on_road = true;

        let matching = ["216.00", "8", "road legal", "14"];
        for term in matching {
            let filters = SearchFilters {
                search_term: term.to_owned(),
                ..DEFAULT_FILTERS
            };
            assert_eq!(
                filter_skips(&[skip.clone()], &filters).len(),
                1,
                "term {term:?} should match"
            );
        }

        let filters = SearchFilters {
            search_term: "private property".to_owned(),
            ..DEFAULT_FILTERS
        };
        assert!(filter_skips(&[skip], &filters).is_empty());
    }

    #[test]
    fn search_term_is_case_insensitive() {
        let skip = fixtures::skip(1, 8, 180);

        let filters = SearchFilters {
            search_term: "  ROAD Legal ".to_owned(),
            ..DEFAULT_FILTERS
        };

        assert_eq!(filter_skips(&[skip], &filters).len(), 1);
    }

    #[test]
    fn invalid_skip_is_excluded_even_with_default_filters() {
        let mut skip = fixtures::skip(1, 8, 300);
        skip.size = 0;

        assert!(filter_skips(&[skip], &DEFAULT_FILTERS).is_empty());
    }

    #[test]
    fn forbidden_skips_pass_through_the_engine() {
        // The engine deliberately ignores `forbidden`; exclusion happens at
        // the selection boundary.
        let mut skip = fixtures::skip(1, 8, 300);
        skip.forbidden = true;

        assert_eq!(filter_skips(&[skip], &DEFAULT_FILTERS).len(), 1);
    }

    #[test]
    fn default_filters_report_no_active_filters() {
        assert!(!DEFAULT_FILTERS.has_active_filters());

        let filters = SearchFilters {
            road_legal: RoadLegal::Road,
            ..DEFAULT_FILTERS
        };
        assert!(filters.has_active_filters());
    }
}
