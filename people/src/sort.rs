//! Sort state for the people table.
//!
//! Clicking a column header cycles that column through three states:
//! ascending, descending, and unsorted. Clicking a different column starts
//! over at ascending on the new column; only one column is ever active.

use crate::error::UnknownSortKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sortable column of the people table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Person's name
    Name,
    /// Person's sex
    Sex,
    /// Year of birth
    Born,
    /// Year of death
    Died,
}

impl SortKey {
    /// All sortable columns, in table order
    pub const ALL: [Self; 4] = [Self::Name, Self::Sex, Self::Born, Self::Died];

    /// Value used for this column in the `sort` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Sex => "sex",
            Self::Born => "born",
            Self::Died => "died",
        }
    }

    /// Column header text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Sex => "Sex",
            Self::Born => "Born",
            Self::Died => "Died",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Ordering of the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first; encoded by leaving `order` out of the query
    #[default]
    Ascending,
    /// Largest first; encoded as `order=desc`
    Descending,
}

impl SortDirection {
    /// Value written to the `order` query parameter for descending order
    pub const DESCENDING_MARKER: &'static str = "desc";

    /// Check if this is descending order
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// Which column the table is sorted by, and in which direction
///
/// An unsorted state always carries [`SortDirection::Ascending`]; the
/// constructors normalize any other combination away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    key: Option<SortKey>,
    direction: SortDirection,
}

impl SortState {
    /// Default row order, no column active
    pub const UNSORTED: Self = Self {
        key: None,
        direction: SortDirection::Ascending,
    };

    /// Build a state, dropping the direction when no column is active
    #[must_use]
    pub const fn new(key: Option<SortKey>, direction: SortDirection) -> Self {
        match key {
            Some(_) => Self { key, direction },
            None => Self::UNSORTED,
        }
    }

    /// Sort by `key`, smallest first
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `key`, largest first
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Descending,
        }
    }

    /// The active column, if any
    #[must_use]
    pub const fn key(self) -> Option<SortKey> {
        self.key
    }

    /// Direction of the active column
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        self.direction
    }

    /// Check if any column is active
    #[must_use]
    pub const fn is_sorted(self) -> bool {
        self.key.is_some()
    }

    /// State after clicking the header of `clicked`
    #[must_use]
    pub fn toggle(self, clicked: SortKey) -> Self {
        next_sort_state(self.key, self.direction, clicked)
    }

    /// Header indicator for `column` under this state
    #[must_use]
    pub fn icon_for(self, column: SortKey) -> SortIcon {
        match (self.key, self.direction) {
            (Some(active), SortDirection::Ascending) if active == column => SortIcon::Ascending,
            (Some(active), SortDirection::Descending) if active == column => SortIcon::Descending,
            _ => SortIcon::Unsorted,
        }
    }
}

/// Compute the sort state after a column header click.
///
/// - same column, descending: clear sorting
/// - same column, ascending: switch to descending
/// - any other column: that column, ascending
#[must_use]
pub fn next_sort_state(
    current_key: Option<SortKey>,
    current_direction: SortDirection,
    clicked: SortKey,
) -> SortState {
    match (current_key, current_direction) {
        (Some(active), SortDirection::Descending) if active == clicked => SortState::UNSORTED,
        (Some(active), SortDirection::Ascending) if active == clicked => {
            SortState::descending(clicked)
        },
        _ => SortState::ascending(clicked),
    }
}

/// Sort indicator shown next to a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortIcon {
    /// Column is not the active one
    Unsorted,
    /// Column is active, ascending
    Ascending,
    /// Column is active, descending
    Descending,
}

impl SortIcon {
    /// Font Awesome class for the icon
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Unsorted => "fa-sort",
            Self::Ascending => "fa-sort-up",
            Self::Descending => "fa-sort-down",
        }
    }

    /// Single-character marker for plain-text output
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Unsorted => '↕',
            Self::Ascending => '↑',
            Self::Descending => '↓',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_sorts_ascending() {
        assert_eq!(
            next_sort_state(None, SortDirection::Ascending, SortKey::Name),
            SortState::ascending(SortKey::Name)
        );
    }

    #[test]
    fn second_click_sorts_descending() {
        assert_eq!(
            next_sort_state(Some(SortKey::Name), SortDirection::Ascending, SortKey::Name),
            SortState::descending(SortKey::Name)
        );
    }

    #[test]
    fn third_click_clears_sorting() {
        let state = next_sort_state(Some(SortKey::Name), SortDirection::Descending, SortKey::Name);
        assert_eq!(state, SortState::UNSORTED);
        assert_eq!(state.key(), None);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn switching_columns_resets_direction() {
        assert_eq!(
            next_sort_state(Some(SortKey::Name), SortDirection::Ascending, SortKey::Born),
            SortState::ascending(SortKey::Born)
        );
        assert_eq!(
            next_sort_state(Some(SortKey::Died), SortDirection::Descending, SortKey::Sex),
            SortState::ascending(SortKey::Sex)
        );
    }

    #[test]
    fn new_drops_direction_without_key() {
        assert_eq!(
            SortState::new(None, SortDirection::Descending),
            SortState::UNSORTED
        );
        assert_eq!(
            SortState::new(Some(SortKey::Born), SortDirection::Descending),
            SortState::descending(SortKey::Born)
        );
    }

    #[test]
    fn toggle_matches_free_function() {
        let state = SortState::ascending(SortKey::Died);
        assert_eq!(state.toggle(SortKey::Died), SortState::descending(SortKey::Died));
        assert_eq!(state.toggle(SortKey::Name), SortState::ascending(SortKey::Name));
    }

    #[test]
    fn icons_follow_active_column() {
        let state = SortState::descending(SortKey::Born);
        assert_eq!(state.icon_for(SortKey::Born), SortIcon::Descending);
        assert_eq!(state.icon_for(SortKey::Name), SortIcon::Unsorted);

        let state = SortState::ascending(SortKey::Name);
        assert_eq!(state.icon_for(SortKey::Name).css_class(), "fa-sort-up");
        assert_eq!(SortState::UNSORTED.icon_for(SortKey::Sex).css_class(), "fa-sort");
    }

    #[test]
    fn sort_key_round_trips_through_str() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert_eq!(
            "age".parse::<SortKey>(),
            Err(UnknownSortKey("age".to_string()))
        );
        // Values are case-sensitive, like the query parameter they come from.
        assert!("Name".parse::<SortKey>().is_err());
    }
}
