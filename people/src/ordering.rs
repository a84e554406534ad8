//! Row ordering for a sort state.

use crate::person::Person;
use crate::sort::{SortDirection, SortKey, SortState};
use std::cmp::Ordering;

fn compare(a: &Person, b: &Person, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Sex => a.sex.as_str().cmp(b.sex.as_str()),
        SortKey::Born => a.born.cmp(&b.born),
        SortKey::Died => a.died.cmp(&b.died),
    }
}

/// Sort `people` in place according to `state`
///
/// The sort is stable, so rows that compare equal keep their input order in
/// both directions. An unsorted state leaves the slice untouched.
pub fn sort_people(people: &mut [Person], state: SortState) {
    let Some(key) = state.key() else {
        return;
    };

    match state.direction() {
        SortDirection::Ascending => people.sort_by(|a, b| compare(a, b, key)),
        SortDirection::Descending => people.sort_by(|a, b| compare(b, a, key)),
    }
}

/// Sorted copy of `people`
#[must_use]
pub fn sorted(people: &[Person], state: SortState) -> Vec<Person> {
    let mut rows = people.to_vec();
    sort_people(&mut rows, state);
    rows
}
