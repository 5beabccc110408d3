//! Search parameters
//!
//! Location queries submitted by the caller, the two validation gates in
//! front of them, and the postcode-derived fallback keys the fetcher walks
//! when no explicit area is supplied.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Minimum trimmed postcode length before a network search is issued.
///
/// Shorter input is treated as "still typing" rather than an error.
pub const MIN_POSTCODE_LEN: usize = 3;

/// A location query: a required postcode and an optional area.
///
/// Created once per search submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchParams {
    /// Postcode to search, e.g. `"NR32 1AB"`.
    pub postcode: String,

    /// Optional area refinement within the postcode.
    #[serde(default)]
    pub area: Option<String>,
}

impl SearchParams {
    /// Creates params with a postcode only.
    #[must_use]
    pub fn new(postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: None,
        }
    }

    /// Creates params with an explicit area.
    #[must_use]
    pub fn with_area(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: Some(area.into()),
        }
    }

    /// Loose validity: at least one of postcode or area is non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.postcode.is_empty() || self.area.as_deref().is_some_and(|area| !area.is_empty())
    }

    /// Strict gate applied before issuing a network call: the trimmed
    /// postcode must be at least [`MIN_POSTCODE_LEN`] characters.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.postcode.trim().chars().count() >= MIN_POSTCODE_LEN
    }

    /// The normalized cache key for this query.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            postcode: self.postcode.trim().to_uppercase(),
            area: self
                .area
                .as_deref()
                .map(|area| area.trim().to_uppercase())
                .unwrap_or_default(),
        }
    }
}

/// Normalized `(postcode, area)` pair keying the fetch cache.
///
/// Responses are stored and looked up under this key, which also makes a
/// stale response for a superseded query discardable: it only ever lands
/// under its own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// Trimmed, uppercased postcode.
    pub postcode: String,

    /// Trimmed, uppercased area; empty when none was supplied.
    pub area: String,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.area.is_empty() {
            write!(f, "{}", self.postcode)
        } else {
            write!(f, "{}/{}", self.postcode, self.area)
        }
    }
}

/// Derives the ordered, de-duplicated list of postcode variations tried as
/// successive fallbacks when no explicit area is given.
///
/// In order: the full trimmed/uppercased postcode, the part before the
/// first space, the leading letter run, and the letter run plus one digit.
/// `"NR32 1AB"` yields `["NR32 1AB", "NR32", "NR", "NR3"]`.
#[must_use]
pub fn area_variations(postcode: &str) -> SmallVec<[String; 4]> {
    let mut variations: SmallVec<[String; 4]> = SmallVec::new();

    let full = postcode.trim().to_uppercase();
    if full.is_empty() {
        return variations;
    }

    let outward = full.split_whitespace().next().map(str::to_owned);

    let letters: String = full.chars().take_while(char::is_ascii_alphabetic).collect();

    let mut letters_digit = letters.clone();
    if let Some(digit) = full
        .chars()
        .nth(letters.chars().count())
        .filter(char::is_ascii_digit)
    {
        letters_digit.push(digit);
    }

    let candidates = [Some(full), outward, Some(letters), Some(letters_digit)];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_empty() && !variations.contains(&candidate) {
            variations.push(candidate);
        }
    }

    variations
}
