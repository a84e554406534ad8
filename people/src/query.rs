//! Query string codec for the sort state.
//!
//! The sort state travels in two query parameters:
//!
//! | state | query |
//! |-------|-------|
//! | unsorted | neither `sort` nor `order` |
//! | `born`, ascending | `sort=born` |
//! | `born`, descending | `sort=born&order=desc` |
//!
//! Decoding is lenient: an unknown `sort` value means unsorted, and any
//! non-empty `order` value means descending.

use crate::error::QueryError;
use crate::sort::{SortDirection, SortKey, SortState};
use serde::{Deserialize, Serialize};

/// Name of the query parameter holding the active column
pub const SORT_PARAM: &str = "sort";

/// Name of the query parameter holding the descending marker
pub const ORDER_PARAM: &str = "order";

/// Raw values of the two sort parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortQuery {
    /// Value of `sort`, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Value of `order`, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl SortQuery {
    /// Extract the sort parameters from a query string
    ///
    /// A leading `?` is ignored, as are unrelated parameters. When a
    /// parameter repeats, its first value wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Decode`] if the query string cannot be decoded.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let pairs = decode_pairs(query)?;
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Ok(Self {
            sort: first(SORT_PARAM),
            order: first(ORDER_PARAM),
        })
    }

    /// Interpret the raw parameters as a sort state
    #[must_use]
    pub fn to_state(&self) -> SortState {
        let key = self
            .sort
            .as_deref()
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<SortKey>().ok());

        let direction = match self.order.as_deref() {
            Some(order) if !order.is_empty() => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };

        SortState::new(key, direction)
    }

    /// Raw parameters for a sort state
    #[must_use]
    pub fn from_state(state: SortState) -> Self {
        Self {
            sort: state.key().map(|key| key.as_str().to_string()),
            order: state
                .direction()
                .is_descending()
                .then(|| SortDirection::DESCENDING_MARKER.to_string()),
        }
    }

    /// Encode as a query string without a leading `?`
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, QueryError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

impl SortState {
    /// Decode the sort state from a query string
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Decode`] if the query string cannot be decoded.
    pub fn from_query(query: &str) -> Result<Self, QueryError> {
        Ok(SortQuery::parse(query)?.to_state())
    }

    /// Decode the sort state, falling back to unsorted on failure
    #[must_use]
    pub fn from_query_lossy(query: &str) -> Self {
        Self::from_query(query).unwrap_or_else(|error| {
            tracing::warn!(%error, query, "Ignoring undecodable sort query");
            Self::UNSORTED
        })
    }

    /// The `sort`/`order` pairs for this state; empty when unsorted
    #[must_use]
    pub fn to_query_pairs(self) -> Vec<(&'static str, &'static str)> {
        match (self.key(), self.direction()) {
            (None, _) => Vec::new(),
            (Some(key), SortDirection::Ascending) => vec![(SORT_PARAM, key.as_str())],
            (Some(key), SortDirection::Descending) => vec![
                (SORT_PARAM, key.as_str()),
                (ORDER_PARAM, SortDirection::DESCENDING_MARKER),
            ],
        }
    }

    /// Encode this state alone as a query string
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Encode`] if serialization fails.
    pub fn to_query_string(self) -> Result<String, QueryError> {
        SortQuery::from_state(self).encode()
    }
}

/// Rewrite the sort parameters of `existing` to describe `next`
///
/// Every other parameter keeps its value and position. A sort parameter
/// that is already present is replaced in place (later duplicates are
/// dropped); a missing one is appended; one that `next` does not need is
/// removed.
///
/// # Errors
///
/// Returns a [`QueryError`] if `existing` cannot be decoded or the result
/// cannot be encoded.
pub fn merge_into_query(existing: &str, next: SortState) -> Result<String, QueryError> {
    let mut pairs = decode_pairs(existing)?;
    let wanted = SortQuery::from_state(next);

    for (name, value) in [(SORT_PARAM, wanted.sort), (ORDER_PARAM, wanted.order)] {
        set_param(&mut pairs, name, value);
    }

    Ok(serde_urlencoded::to_string(&pairs)?)
}

fn set_param(pairs: &mut Vec<(String, String)>, name: &str, value: Option<String>) {
    let Some(value) = value else {
        pairs.retain(|(key, _)| key != name);
        return;
    };

    match pairs.iter().position(|(key, _)| key == name) {
        Some(first) => {
            pairs[first].1 = value;
            let mut index = 0;
            pairs.retain(|(key, _)| {
                let keep = key != name || index == first;
                index += 1;
                keep
            });
        },
        None => pairs.push((name.to_string(), value)),
    }
}

fn decode_pairs(query: &str) -> Result<Vec<(String, String)>, QueryError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    Ok(serde_urlencoded::from_str(query)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_unsorted() {
        assert_eq!(SortState::from_query("").unwrap(), SortState::UNSORTED);
        assert_eq!(SortState::from_query("?").unwrap(), SortState::UNSORTED);
    }

    #[test]
    fn decodes_ascending_and_descending() {
        assert_eq!(
            SortState::from_query("sort=born").unwrap(),
            SortState::ascending(SortKey::Born)
        );
        assert_eq!(
            SortState::from_query("?sort=born&order=desc").unwrap(),
            SortState::descending(SortKey::Born)
        );
    }

    #[test]
    fn any_order_value_means_descending() {
        assert_eq!(
            SortState::from_query("sort=sex&order=yes").unwrap(),
            SortState::descending(SortKey::Sex)
        );
        assert_eq!(
            SortState::from_query("sort=sex&order=").unwrap(),
            SortState::ascending(SortKey::Sex)
        );
    }

    #[test]
    fn unknown_or_missing_sort_clears_direction() {
        assert_eq!(
            SortState::from_query("sort=age&order=desc").unwrap(),
            SortState::UNSORTED
        );
        assert_eq!(SortState::from_query("order=desc").unwrap(), SortState::UNSORTED);
    }

    #[test]
    fn first_duplicate_wins() {
        assert_eq!(
            SortState::from_query("sort=died&sort=name").unwrap(),
            SortState::ascending(SortKey::Died)
        );
    }

    #[test]
    fn unrelated_params_are_ignored() {
        assert_eq!(
            SortState::from_query("query=ann&sex=f&sort=name").unwrap(),
            SortState::ascending(SortKey::Name)
        );
    }

    #[test]
    fn encodes_states() {
        assert_eq!(SortState::UNSORTED.to_query_string().unwrap(), "");
        assert_eq!(
            SortState::ascending(SortKey::Born).to_query_string().unwrap(),
            "sort=born"
        );
        assert_eq!(
            SortState::descending(SortKey::Born).to_query_string().unwrap(),
            "sort=born&order=desc"
        );
    }

    #[test]
    fn query_pairs_follow_direction() {
        assert!(SortState::UNSORTED.to_query_pairs().is_empty());
        assert_eq!(
            SortState::descending(SortKey::Name).to_query_pairs(),
            vec![("sort", "name"), ("order", "desc")]
        );
    }

    #[test]
    fn merge_keeps_other_params_in_place() {
        let merged = merge_into_query(
            "query=ann&sort=name&sex=f",
            SortState::descending(SortKey::Name),
        )
        .unwrap();
        assert_eq!(merged, "query=ann&sort=name&sex=f&order=desc");
    }

    #[test]
    fn merge_clears_both_params() {
        let merged =
            merge_into_query("?sort=name&order=desc&centuries=16", SortState::UNSORTED).unwrap();
        assert_eq!(merged, "centuries=16");
    }

    #[test]
    fn merge_drops_order_when_switching_columns() {
        let merged =
            merge_into_query("sort=name&order=desc", SortState::ascending(SortKey::Born)).unwrap();
        assert_eq!(merged, "sort=born");
    }

    #[test]
    fn merge_collapses_duplicates() {
        let merged =
            merge_into_query("sort=sex&x=1&sort=died", SortState::ascending(SortKey::Died))
                .unwrap();
        assert_eq!(merged, "sort=died&x=1");
    }

    #[test]
    fn merge_preserves_repeated_unrelated_params() {
        let merged = merge_into_query(
            "centuries=16&centuries=17",
            SortState::ascending(SortKey::Sex),
        )
        .unwrap();
        assert_eq!(merged, "centuries=16&centuries=17&sort=sex");
    }

    #[test]
    fn lossy_decode_never_fails() {
        assert_eq!(SortState::from_query_lossy("%%%"), SortState::UNSORTED);
        assert_eq!(
            SortState::from_query_lossy("sort=died"),
            SortState::ascending(SortKey::Died)
        );
    }
}
