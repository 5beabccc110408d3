//! Algebraic properties of the filtering engine.
//!
//! The engine is pure and order-preserving, so three properties must hold
//! for any facet set: applying it twice changes nothing (idempotence), the
//! output is a subsequence of the input (stability), and adding a
//! constraint never grows the result (monotonicity).

use rust_decimal::Decimal;
use skipsearch::{
    filters::{DEFAULT_FILTERS, PriceRange, RoadLegal, SearchFilters, SizeRange, filter_skips},
    fixtures,
    skips::Skip,
};

fn sample_filter_sets() -> Vec<SearchFilters> {
    vec![
        DEFAULT_FILTERS,
        SearchFilters {
            size_range: SizeRange::Medium,
            ..DEFAULT_FILTERS
        },
        SearchFilters {
            price_range: PriceRange::Budget,
            road_legal: RoadLegal::Road,
            ..DEFAULT_FILTERS
        },
        SearchFilters {
            search_term: "road".to_owned(),
            ..DEFAULT_FILTERS
        },
        SearchFilters {
            search_term: "14".to_owned(),
            size_range: SizeRange::Large,
            price_range: PriceRange::Mid,
            road_legal: RoadLegal::Road,
            ..DEFAULT_FILTERS
        },
    ]
}

fn is_subsequence(output: &[Skip], input: &[Skip]) -> bool {
    let mut remaining = input.iter();
    output
        .iter()
        .all(|needle| remaining.any(|candidate| candidate == needle))
}

#[test]
fn empty_filters_return_everything_in_order() {
    let skips = fixtures::skips(&[4, 8, 16]);

    let filtered = filter_skips(&skips, &DEFAULT_FILTERS);

    assert_eq!(filtered, skips);
}

#[test]
fn filtering_is_idempotent() {
    let skips = fixtures::skips(&[2, 4, 5, 6, 8, 9, 10, 12, 13, 14, 16]);

    for filters in sample_filter_sets() {
        let once = filter_skips(&skips, &filters);
        let twice = filter_skips(&once, &filters);

        assert_eq!(once, twice, "second application changed the result");
    }
}

#[test]
fn output_is_a_subsequence_of_the_input() {
    let skips = fixtures::skips(&[16, 4, 12, 8, 6, 14, 10]);

    for filters in sample_filter_sets() {
        let filtered = filter_skips(&skips, &filters);

        assert!(
            is_subsequence(&filtered, &skips),
            "output reordered or invented skips for {filters:?}"
        );
    }
}

#[test]
fn adding_a_constraint_never_grows_the_result() {
    let skips = fixtures::skips(&[2, 4, 6, 8, 10, 12, 14, 16]);

    let unconstrained = filter_skips(&skips, &DEFAULT_FILTERS).len();

    let sized = SearchFilters {
        size_range: SizeRange::Medium,
        ..DEFAULT_FILTERS
    };
    let sized_count = filter_skips(&skips, &sized).len();
    assert!(sized_count <= unconstrained, "size facet grew the result");

    let sized_and_priced = SearchFilters {
        price_range: PriceRange::Budget,
        ..sized.clone()
    };
    let sized_and_priced_count = filter_skips(&skips, &sized_and_priced).len();
    assert!(
        sized_and_priced_count <= sized_count,
        "price facet grew the result"
    );

    let fully_constrained = SearchFilters {
        road_legal: RoadLegal::Private,
        ..sized_and_priced
    };
    assert!(
        filter_skips(&skips, &fully_constrained).len() <= sized_and_priced_count,
        "road facet grew the result"
    );
}

#[test]
fn combined_facets_use_exact_vat_arithmetic() {
    // £350 + 20% VAT is exactly £420, which lands in the premium bucket,
    // so a medium/mid/private query over these two skips matches nothing.
    let mut cheap = fixtures::skip(1, 8, 180);
    cheap.allowed_on_road = true;
    let mut dear = fixtures::skip(2, 8, 350);
    dear.allowed_on_road = false;
    let skips = vec![cheap, dear.clone()];

    let filters = SearchFilters {
        size_range: SizeRange::Medium,
        price_range: PriceRange::Mid,
        road_legal: RoadLegal::Private,
        ..DEFAULT_FILTERS
    };
    assert!(filter_skips(&skips, &filters).is_empty());

    // Relaxing the price facet to premium matches only the dearer skip.
    let premium = SearchFilters {
        price_range: PriceRange::Premium,
        ..filters
    };
    assert_eq!(filter_skips(&skips, &premium), vec![dear]);
}

#[test]
fn validity_gate_applies_under_every_filter_set() {
    let mut broken = fixtures::skip(7, 8, 300);
    broken.price_before_vat = Decimal::from(-1);
    let skips = vec![broken, fixtures::skip(8, 8, 300)];

    for filters in sample_filter_sets() {
        let filtered = filter_skips(&skips, &filters);
        assert!(
            filtered.iter().all(Skip::is_valid),
            "an invalid skip leaked through {filters:?}"
        );
    }
}
