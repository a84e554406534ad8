//! Table view model.
//!
//! [`PeopleTable`] holds everything a renderer needs: header cells with
//! their sort indicator and the query string their link points to, and one
//! row per person. Rows are rendered in the order given; sorting happens
//! before the table is built.

use crate::error::QueryError;
use crate::person::{Person, Sex};
use crate::query::merge_into_query;
use crate::sort::{SortIcon, SortKey, SortState};
use std::fmt::Write as _;

/// A column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderCell {
    /// Header of a sortable column
    Sortable {
        /// The column
        column: SortKey,
        /// Current sort indicator
        icon: SortIcon,
        /// Query string a click navigates to
        link: String,
    },
    /// Header without sorting
    Plain {
        /// Header text
        label: &'static str,
    },
}

impl HeaderCell {
    /// Header text
    #[must_use]
    pub fn label(&self) -> &'static str {
        match *self {
            Self::Sortable { column, .. } => column.label(),
            Self::Plain { label } => label,
        }
    }
}

/// Content of a mother/father cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentCell {
    /// Parent is in the data set and can be linked to
    Linked {
        /// Parent's name
        name: String,
        /// Parent's slug
        slug: String,
    },
    /// Only the parent's name is known
    Named(String),
    /// Nothing is known
    Missing,
}

impl ParentCell {
    fn new(resolved: Option<&Person>, name: Option<&str>) -> Self {
        match (resolved, name) {
            (Some(parent), _) => Self::Linked {
                name: parent.name.clone(),
                slug: parent.slug.clone(),
            },
            (None, Some(name)) if !name.is_empty() => Self::Named(name.to_string()),
            _ => Self::Missing,
        }
    }

    /// Cell text; `-` when nothing is known
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Linked { name, .. } | Self::Named(name) => name,
            Self::Missing => "-",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    /// Slug, used for the detail link
    pub slug: String,
    /// Name
    pub name: String,
    /// Sex
    pub sex: Sex,
    /// Year of birth
    pub born: i32,
    /// Year of death
    pub died: i32,
    /// Mother cell
    pub mother: ParentCell,
    /// Father cell
    pub father: ParentCell,
    /// Row belongs to the currently selected person
    pub highlighted: bool,
}

impl PersonRow {
    fn new(person: &Person, selected_slug: Option<&str>) -> Self {
        Self {
            slug: person.slug.clone(),
            name: person.name.clone(),
            sex: person.sex,
            born: person.born,
            died: person.died,
            mother: ParentCell::new(person.mother.as_deref(), person.mother_name.as_deref()),
            father: ParentCell::new(person.father.as_deref(), person.father_name.as_deref()),
            highlighted: selected_slug == Some(person.slug.as_str()),
        }
    }

    fn cells(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.sex.to_string(),
            self.born.to_string(),
            self.died.to_string(),
            self.mother.text().to_string(),
            self.father.text().to_string(),
        ]
    }
}

/// The rendered state of the people table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleTable {
    /// Column headers; empty when there are no rows
    pub headers: Vec<HeaderCell>,
    /// Rows in display order
    pub rows: Vec<PersonRow>,
}

impl PeopleTable {
    /// Build the table for `people` under `sort`
    ///
    /// Header links are `base_query` with its sort parameters replaced by
    /// the state a click on that header would produce.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if `base_query` cannot be decoded.
    pub fn build(
        people: &[Person],
        sort: SortState,
        selected_slug: Option<&str>,
        base_query: &str,
    ) -> Result<Self, QueryError> {
        let headers = if people.is_empty() {
            Vec::new()
        } else {
            let mut headers = SortKey::ALL
                .into_iter()
                .map(|column| {
                    Ok(HeaderCell::Sortable {
                        column,
                        icon: sort.icon_for(column),
                        link: merge_into_query(base_query, sort.toggle(column))?,
                    })
                })
                .collect::<Result<Vec<_>, QueryError>>()?;
            headers.push(HeaderCell::Plain { label: "Mother" });
            headers.push(HeaderCell::Plain { label: "Father" });
            headers
        };

        let rows = people
            .iter()
            .map(|person| PersonRow::new(person, selected_slug))
            .collect();

        Ok(Self { headers, rows })
    }

    /// Header for a sortable column
    #[must_use]
    pub fn header(&self, column: SortKey) -> Option<&HeaderCell> {
        self.headers
            .iter()
            .find(|cell| matches!(cell, HeaderCell::Sortable { column: c, .. } if *c == column))
    }

    /// Render as aligned plain text
    ///
    /// Sortable headers carry their sort glyph, and the highlighted row is
    /// marked with `*`. An empty table renders as an empty string.
    #[must_use]
    pub fn render_text(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let header_cells: Vec<String> = self
            .headers
            .iter()
            .map(|cell| match cell {
                HeaderCell::Sortable { column, icon, .. } => {
                    format!("{} {}", column.label(), icon.glyph())
                },
                HeaderCell::Plain { label } => (*label).to_string(),
            })
            .collect();
        let body: Vec<[String; 6]> = self.rows.iter().map(PersonRow::cells).collect();

        let mut widths: Vec<usize> = header_cells.iter().map(|c| c.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        write_line(&mut out, ' ', &header_cells, &widths);
        for (row, cells) in self.rows.iter().zip(&body) {
            let marker = if row.highlighted { '*' } else { ' ' };
            write_line(&mut out, marker, cells, &widths);
        }
        out
    }
}

fn write_line(out: &mut String, marker: char, cells: &[String], widths: &[usize]) {
    out.push(marker);
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, " {cell:<width$} |");
    }
    while out.ends_with('|') || out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
