use crate::error::ClientError;
use crate::model::auth::SessionToken;
use crate::presentation::book::BookId;
use async_trait::async_trait;

/// Interface for the book mutation service
#[async_trait]
pub trait BookService: Send + Sync {
    /// Deletes a book on the server
    ///
    /// Not idempotent: deleting an id that is already gone reports the
    /// server's error.
    ///
    /// # Arguments
    /// * `token` - Session token authorising the call
    /// * `book_id` - Id of the book to delete
    async fn delete_book(&self, token: &SessionToken, book_id: BookId) -> Result<(), ClientError>;
}
