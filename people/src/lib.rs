//! # People Table
//!
//! A table of people whose sort order lives in the URL query string.
//!
//! Clicking a sortable header cycles that column through ascending,
//! descending, and unsorted; clicking another column starts that one at
//! ascending. The active column is stored in `sort`, and descending order
//! adds `order=desc`:
//!
//! ```
//! use people_table::sort::{SortKey, SortState};
//!
//! let state = SortState::from_query_lossy("sort=born");
//! assert_eq!(state, SortState::ascending(SortKey::Born));
//!
//! let next = state.toggle(SortKey::Born);
//! assert_eq!(next.to_query_string().ok().as_deref(), Some("sort=born&order=desc"));
//! ```
//!
//! ## Modules
//!
//! - [`sort`]: sort keys, sort state and the click transition
//! - [`query`]: reading and writing the sort parameters of a query string
//! - [`person`]: people records and parent linking
//! - [`ordering`]: ordering rows for a sort state
//! - [`table`]: the table view model
//! - [`reducer`]: state, actions and reducer for running under a `Store`
//! - [`config`]: environment configuration

pub mod config;
pub mod error;
pub mod ordering;
pub mod person;
pub mod query;
pub mod reducer;
pub mod sort;
pub mod table;

pub use error::{ConfigError, PeopleError, QueryError, UnknownSortKey};
pub use person::{Person, Sex};
pub use query::merge_into_query;
pub use reducer::{
    LogNavigator, Navigator, PeopleTableAction, PeopleTableEnvironment, PeopleTableReducer,
    PeopleTableState,
};
pub use sort::{next_sort_state, SortDirection, SortIcon, SortKey, SortState};
pub use table::PeopleTable;
