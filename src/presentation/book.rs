/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Identifier of a book in the remote catalog
pub type BookId = i64;

/// A book in the user's library
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog id
    pub id: BookId,
    /// Title
    pub title: String,
    /// Author names, in credit order
    #[serde(default)]
    pub authors: Vec<String>,
    /// Position within its series, if it belongs to one
    #[serde(default)]
    pub position: Option<u32>,
}

impl Book {
    /// Creates a book outside any series
    pub fn new(id: BookId, title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            authors,
            position: None,
        }
    }

    /// Sets the position within a series
    #[must_use]
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Author names joined for display, e.g. `"Neil Gaiman, Terry Pratchett"`
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    fn sort_key(&self) -> (String, BookId) {
        (self.title.to_lowercase(), self.id)
    }
}

/// Books held locally by the caller
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookList {
    /// Books in insertion order
    pub books: Vec<Book>,
}

impl BookList {
    /// Creates a list from books
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the list holds no book
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book with the given id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Books in display order: by title ignoring case, then by id
    pub fn sorted(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.iter().collect();
        books.sort_by_cached_key(|b| b.sort_key());
        books
    }

    /// Book at `offset` in display order
    pub fn sorted_at(&self, offset: usize) -> Option<&Book> {
        self.sorted().get(offset).copied()
    }

    /// Removes the book with the given id and returns it
    ///
    /// Only the first match is removed; every other book is kept.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let index = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(index))
    }
}
