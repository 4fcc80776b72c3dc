/// Book and local book list models
pub mod book;
/// Delete confirmation flow
pub mod delete_flow;
/// Series models
pub mod series;

pub use book::{Book, BookId, BookList};
pub use delete_flow::{DeleteFlow, DeleteState};
pub use series::Series;
