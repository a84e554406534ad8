//! # People Table Testing
//!
//! Testing utilities for people table reducers.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then harness for reducers
//! - [`assertions`]: helpers for checking returned effects
//!
//! ## Example
//!
//! ```ignore
//! use people_table_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn clicking_name_sorts_ascending() {
//!     ReducerTest::new(PeopleTableReducer::new())
//!         .with_env(test_environment())
//!         .given_state(PeopleTableState::default())
//!         .when_action(PeopleTableAction::ColumnClicked(SortKey::Name))
//!         .then_state(|state| assert_eq!(state.query, "sort=name"))
//!         .then_effects(assertions::assert_has_future_effect)
//!         .run();
//! }
//! ```


// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
