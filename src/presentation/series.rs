use crate::presentation::book::{Book, BookId, BookList};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A book series
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Catalog id
    pub id: i64,
    /// Series name
    pub name: String,
    /// Number of books planned in the series, 0 when unknown
    #[serde(default, alias = "plannedCount")]
    pub planned_count: u32,
    /// Ids of the member books
    #[serde(default)]
    pub books: Vec<BookId>,
}

impl Series {
    /// Member books found in `list`, ordered by their series position
    ///
    /// Books without a position come last.
    pub fn books_in<'a>(&self, list: &'a BookList) -> Vec<&'a Book> {
        let mut members: Vec<&Book> = list
            .books
            .iter()
            .filter(|b| self.books.contains(&b.id))
            .collect();
        members.sort_by_key(|b| (b.position.is_none(), b.position, b.id));
        members
    }

    /// Unique author names of the member books, alphabetical, comma separated
    pub fn contributors(&self, list: &BookList) -> String {
        let mut names: Vec<&str> = self
            .books_in(list)
            .into_iter()
            .flat_map(|b| b.authors.iter().map(String::as_str))
            .collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names.dedup();
        names.join(", ")
    }

    /// Caption for the planned size, e.g. `"23 books in series"`
    pub fn planned_caption(&self) -> Option<String> {
        (self.planned_count > 0).then(|| format!("{} books in series", self.planned_count))
    }
}
