//! People table reducer.
//!
//! Keeps the loaded people, the active sort state, the selected person and
//! the raw query string in one state value. Header clicks rewrite the query
//! and hand it to the [`Navigator`] so the new sort ends up in the URL.

use crate::error::QueryError;
use crate::ordering::sorted;
use crate::person::{link_parents, Person};
use crate::query::merge_into_query;
use crate::sort::{SortKey, SortState};
use crate::table::PeopleTable;
use people_table_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Pushes a new query string to wherever the URL lives
pub trait Navigator: Send + Sync {
    /// Replace the current query with `query` (no leading `?`)
    fn navigate(&self, query: String) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Navigator that only logs the target query
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, query: String) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            tracing::info!(query = %query, "Navigating");
        })
    }
}

/// Environment for [`PeopleTableReducer`]
#[derive(Clone)]
pub struct PeopleTableEnvironment {
    /// Where header clicks navigate to
    pub navigator: Arc<dyn Navigator>,
}

impl PeopleTableEnvironment {
    /// Creates a new environment
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }
}

impl Default for PeopleTableEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(LogNavigator))
    }
}

/// State of the people table page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleTableState {
    /// People in load order, parents linked
    pub people: Vec<Person>,
    /// Active sort state
    pub sort: SortState,
    /// Slug of the highlighted person
    pub selected_slug: Option<String>,
    /// Current query string without a leading `?`
    pub query: String,
}

impl PeopleTableState {
    /// View model for the current state
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the stored query cannot be decoded.
    pub fn table(&self) -> Result<PeopleTable, QueryError> {
        PeopleTable::build(
            &sorted(&self.people, self.sort),
            self.sort,
            self.selected_slug.as_deref(),
            &self.query,
        )
    }
}

/// Actions for the people table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleTableAction {
    /// People data arrived
    PeopleLoaded(Vec<Person>),
    /// The URL query changed
    QueryChanged(String),
    /// A sortable column header was clicked
    ColumnClicked(SortKey),
    /// A person was selected, or the selection cleared
    PersonSelected(Option<String>),
}

/// Reducer for the people table
#[derive(Debug, Clone, Copy, Default)]
pub struct PeopleTableReducer;

impl PeopleTableReducer {
    /// Creates a new reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for PeopleTableReducer {
    type State = PeopleTableState;
    type Action = PeopleTableAction;
    type Environment = PeopleTableEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PeopleTableAction::PeopleLoaded(mut people) => {
                link_parents(&mut people);
                tracing::debug!(count = people.len(), "People loaded");
                state.people = people;
                smallvec![Effect::None]
            },

            PeopleTableAction::QueryChanged(query) => {
                let query = query.strip_prefix('?').unwrap_or(&query).to_string();
                state.sort = SortState::from_query_lossy(&query);
                tracing::debug!(query = %query, sort = ?state.sort, "Query changed");
                state.query = query;
                smallvec![Effect::None]
            },

            PeopleTableAction::ColumnClicked(column) => {
                let next = state.sort.toggle(column);
                let query = match merge_into_query(&state.query, next) {
                    Ok(query) => query,
                    Err(error) => {
                        tracing::warn!(%error, column = %column, "Ignoring click, query is undecodable");
                        return smallvec![Effect::None];
                    },
                };

                tracing::debug!(column = %column, from = ?state.sort, to = ?next, "Column clicked");
                state.sort = next;
                state.query.clone_from(&query);

                let navigator = Arc::clone(&env.navigator);
                smallvec![Effect::Future(Box::pin(async move {
                    navigator.navigate(query).await;
                    None
                }))]
            },

            PeopleTableAction::PersonSelected(slug) => {
                state.selected_slug = slug;
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::person::Sex;
    use people_table_testing::{assertions, ReducerTest};

    fn person(name: &str, born: i32, mother_name: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            sex: Sex::Female,
            born,
            died: born + 70,
            father_name: None,
            mother_name: mother_name.map(str::to_string),
            slug: name.to_lowercase(),
            mother: None,
            father: None,
        }
    }

    type TableTest =
        ReducerTest<PeopleTableReducer, PeopleTableState, PeopleTableAction, PeopleTableEnvironment>;

    fn test() -> TableTest {
        ReducerTest::new(PeopleTableReducer::new()).with_env(PeopleTableEnvironment::default())
    }

    #[test]
    fn loading_links_parents() {
        test()
            .given_state(PeopleTableState::default())
            .when_action(PeopleTableAction::PeopleLoaded(vec![
                person("Ann", 1900, Some("Beth")),
                person("Beth", 1870, None),
            ]))
            .then_state(|state| {
                assert_eq!(state.people.len(), 2);
                let mother = state.people[0].mother.as_ref().unwrap();
                assert_eq!(mother.slug, "beth");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn query_change_adopts_sort_state() {
        test()
            .given_state(PeopleTableState::default())
            .when_action(PeopleTableAction::QueryChanged(
                "?query=a&sort=born&order=desc".to_string(),
            ))
            .then_state(|state| {
                assert_eq!(state.sort, SortState::descending(SortKey::Born));
                assert_eq!(state.query, "query=a&sort=born&order=desc");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn unknown_sort_in_query_is_unsorted() {
        test()
            .given_state(PeopleTableState {
                sort: SortState::ascending(SortKey::Name),
                ..Default::default()
            })
            .when_action(PeopleTableAction::QueryChanged("sort=age".to_string()))
            .then_state(|state| assert_eq!(state.sort, SortState::UNSORTED))
            .run();
    }

    #[test]
    fn clicks_cycle_through_three_states() {
        test()
            .given_state(PeopleTableState {
                query: "query=ann".to_string(),
                ..Default::default()
            })
            .when_action(PeopleTableAction::ColumnClicked(SortKey::Died))
            .then_state(|state| {
                assert_eq!(state.sort, SortState::ascending(SortKey::Died));
                assert_eq!(state.query, "query=ann&sort=died");
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();

        test()
            .given_state(PeopleTableState::default())
            .when_actions([
                PeopleTableAction::ColumnClicked(SortKey::Died),
                PeopleTableAction::ColumnClicked(SortKey::Died),
            ])
            .then_state(|state| {
                assert_eq!(state.sort, SortState::descending(SortKey::Died));
                assert_eq!(state.query, "sort=died&order=desc");
            })
            .run();

        test()
            .given_state(PeopleTableState::default())
            .when_actions([
                PeopleTableAction::ColumnClicked(SortKey::Died),
                PeopleTableAction::ColumnClicked(SortKey::Died),
                PeopleTableAction::ColumnClicked(SortKey::Died),
            ])
            .then_state(|state| {
                assert_eq!(state.sort, SortState::UNSORTED);
                assert_eq!(state.query, "");
            })
            .run();
    }

    #[test]
    fn clicking_other_column_restarts_ascending() {
        test()
            .given_state(PeopleTableState {
                sort: SortState::descending(SortKey::Name),
                query: "sort=name&order=desc".to_string(),
                ..Default::default()
            })
            .when_action(PeopleTableAction::ColumnClicked(SortKey::Sex))
            .then_state(|state| {
                assert_eq!(state.sort, SortState::ascending(SortKey::Sex));
                assert_eq!(state.query, "sort=sex");
            })
            .run();
    }

    #[test]
    fn selection_is_stored() {
        test()
            .given_state(PeopleTableState::default())
            .when_actions([
                PeopleTableAction::PersonSelected(Some("ann".to_string())),
                PeopleTableAction::PersonSelected(None),
            ])
            .then_state(|state| assert_eq!(state.selected_slug, None))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn click_effect_navigates_without_feedback() {
        let mut state = PeopleTableState {
            query: "query=ann".to_string(),
            ..Default::default()
        };
        let effects = PeopleTableReducer::new().reduce(
            &mut state,
            PeopleTableAction::ColumnClicked(SortKey::Sex),
            &PeopleTableEnvironment::default(),
        );

        let Some(Effect::Future(future)) = effects.into_iter().next() else {
            panic!("expected a future effect");
        };
        assert_eq!(tokio_test::block_on(future), None);
    }

    #[test]
    fn table_rows_follow_sort_state() {
        let state = PeopleTableState {
            people: vec![person("Beth", 1870, None), person("Ann", 1900, None)],
            sort: SortState::ascending(SortKey::Name),
            selected_slug: Some("beth".to_string()),
            query: "sort=name".to_string(),
        };

        let table = state.table().unwrap();
        let names: Vec<_> = table.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Beth"]);
        assert!(table.rows[1].highlighted);
    }
}
