/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Delete confirmation flow
//!
//! Headless version of the swipe-to-delete interaction of the book list:
//!
//! ```text
//! Idle -> ConfirmPending -> Deleting -> Idle
//!                 |                  \-> ErrorShown -> Idle
//!                 \-> Idle (cancel)
//! ```
//!
//! The local list is only touched when the server confirmed the delete.

use crate::application::interfaces::book::BookService;
use crate::error::ClientError;
use crate::model::auth::SessionToken;
use crate::presentation::book::{BookId, BookList};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State of the delete flow
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub enum DeleteState {
    /// Nothing in progress
    #[default]
    Idle,
    /// Waiting for the user to confirm
    ConfirmPending {
        /// Book the user picked
        book_id: BookId,
        /// Its title, for the prompt
        title: String,
    },
    /// Delete request sent, waiting for the outcome
    Deleting {
        /// Book being deleted
        book_id: BookId,
    },
    /// The delete failed and the message is on screen
    ErrorShown {
        /// Message to display
        message: String,
    },
}

/// Drives one delete interaction at a time
#[derive(Debug, Clone, Default)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    /// Creates an idle flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Prompt text while a confirmation is pending
    pub fn prompt(&self) -> Option<String> {
        match &self.state {
            DeleteState::ConfirmPending { title, .. } => Some(format!("Delete '{title}'")),
            _ => None,
        }
    }

    /// Asks for confirmation to delete the book with `book_id`
    ///
    /// Returns false, leaving the state unchanged, when the flow is busy or
    /// the id is not in the list.
    pub fn request(&mut self, list: &BookList, book_id: BookId) -> bool {
        if self.state != DeleteState::Idle {
            return false;
        }
        let Some(book) = list.get(book_id) else {
            return false;
        };
        self.state = DeleteState::ConfirmPending {
            book_id,
            title: book.title.clone(),
        };
        true
    }

    /// Same as [`DeleteFlow::request`] for the book at `offset` in display order
    pub fn request_at(&mut self, list: &BookList, offset: usize) -> bool {
        match list.sorted_at(offset).map(|b| b.id) {
            Some(book_id) => self.request(list, book_id),
            None => false,
        }
    }

    /// Drops a pending confirmation
    pub fn cancel(&mut self) {
        if matches!(self.state, DeleteState::ConfirmPending { .. }) {
            self.state = DeleteState::Idle;
        }
    }

    /// Confirms the pending delete and returns the id to send to the server
    pub fn confirm(&mut self) -> Option<BookId> {
        match self.state {
            DeleteState::ConfirmPending { book_id, .. } => {
                self.state = DeleteState::Deleting { book_id };
                Some(book_id)
            }
            _ => None,
        }
    }

    /// Applies the server outcome
    ///
    /// On success exactly the deleted book is removed from `list`. On error the
    /// list is left alone and the message is shown.
    pub fn complete(&mut self, result: Result<(), ClientError>, list: &mut BookList) {
        let DeleteState::Deleting { book_id } = self.state else {
            debug!("Ignoring delete outcome in state {:?}", self.state);
            return;
        };
        match result {
            Ok(()) => {
                list.remove(book_id);
                self.state = DeleteState::Idle;
            }
            Err(e) => {
                warn!("Delete of book {} failed: {}", book_id, e);
                self.state = DeleteState::ErrorShown {
                    message: e.to_string(),
                };
            }
        }
    }

    /// Dismisses the error message
    pub fn dismiss(&mut self) {
        if matches!(self.state, DeleteState::ErrorShown { .. }) {
            self.state = DeleteState::Idle;
        }
    }

    /// Confirms, calls the server and applies the outcome in one go
    ///
    /// Does nothing and returns `None` unless a confirmation is pending.
    pub async fn run_delete<S>(
        &mut self,
        service: &S,
        token: &SessionToken,
        list: &mut BookList,
    ) -> Option<Result<(), ClientError>>
    where
        S: BookService + ?Sized,
    {
        let book_id = self.confirm()?;
        let result = service.delete_book(token, book_id).await;
        self.complete(result.clone(), list);
        Some(result)
    }
}
