// Common utilities for integration tests

use libawesome_client::prelude::*;
use mockito::ServerGuard;

/// Creates a client pointed at a mock server
pub fn client_for(server: &ServerGuard) -> HttpClient {
    setup_logger();
    HttpClient::new(Config::with_base_url(server.url())).expect("mock server url is valid")
}

/// Creates a client pointed at a local port nothing listens on
///
/// Port 1 is privileged and outside the ephemeral range, so no other test can
/// grab it between runs.
pub fn unreachable_client() -> HttpClient {
    setup_logger();
    HttpClient::new(Config::with_base_url("http://127.0.0.1:1/api/")).expect("local url is valid")
}

/// A small library used by the delete tests
pub fn sample_books() -> BookList {
    BookList::new(vec![
        Book::new(
            1,
            "Good Omens",
            vec!["Neil Gaiman".to_string(), "Terry Pratchett".to_string()],
        ),
        Book::new(2, "A Great and Terrible Beauty", vec!["Libba Bray".to_string()]),
        Book::new(3, "Storm Front", vec!["Jim Butcher".to_string()]),
    ])
}
