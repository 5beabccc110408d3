//! Result presentation
//!
//! Collapses the fetch/filter outcome into a single named state for view
//! layers. States are mutually exclusive and evaluated in a fixed
//! precedence order, so invalid input always wins over loading or error
//! flags.

/// The state a view layer should render for one search outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    /// Search params failed validation; prompt for more input.
    InvalidSearch,

    /// Fetch in flight.
    Loading,

    /// Fetch failed; show the message alongside a retry control.
    Error {
        /// Human-readable description of the failure.
        message: String,
    },

    /// Fetch succeeded but the location has no skips at all.
    NoResults,

    /// Skips exist but the active filters excluded all of them; carries
    /// the raw total for a "clear filters" affordance.
    NoFilterMatch {
        /// Number of skips before filtering.
        total: usize,
    },

    /// Matching skips to show; carries both counts so the view can render
    /// "showing N of M" when filters are active.
    Results {
        /// Number of skips after filtering.
        filtered: usize,
        /// Number of skips before filtering.
        total: usize,
    },
}

/// Classifies a search outcome into exactly one [`ResultState`].
///
/// Precedence: invalid search, then loading, then error, then empty raw
/// results, then empty filtered results, then results.
#[must_use]
pub fn classify_result_state(
    valid_search: bool,
    loading: bool,
    error: Option<&str>,
    total: usize,
    filtered: usize,
) -> ResultState {
    if !valid_search {
        return ResultState::InvalidSearch;
    }

    if loading {
        return ResultState::Loading;
    }

    if let Some(message) = error {
        return ResultState::Error {
            message: message.to_owned(),
        };
    }

    if total == 0 {
        return ResultState::NoResults;
    }

    if filtered == 0 {
        return ResultState::NoFilterMatch { total };
    }

    ResultState::Results { filtered, total }
}
