use crate::common;
use libawesome_client::prelude::*;
use mockito::Server;

#[tokio::test]
async fn test_confirmed_delete_removes_exactly_that_book() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/books/2/")
        .with_status(204)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let token = SessionToken::new("abc123");
    let mut books = common::sample_books();
    let mut flow = DeleteFlow::new();

    assert!(flow.request(&books, 2));
    assert_eq!(
        flow.prompt().as_deref(),
        Some("Delete 'A Great and Terrible Beauty'")
    );

    let outcome = flow.run_delete(&client, &token, &mut books).await;

    assert_eq!(outcome, Some(Ok(())));
    assert_eq!(flow.state(), &DeleteState::Idle);
    let remaining: Vec<BookId> = books.books.iter().map(|b| b.id).collect();
    assert_eq!(remaining, vec![1, 3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_delete_keeps_list_and_shows_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/books/1/")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"You do not have permission to perform this action."}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let mut books = common::sample_books();
    let before = books.clone();
    let mut flow = DeleteFlow::new();

    assert!(flow.request_at(&books, 1));
    let outcome = flow
        .run_delete(&client, &SessionToken::new("abc"), &mut books)
        .await;

    assert!(matches!(outcome, Some(Err(ClientError::Unauthorized(_)))));
    assert_eq!(books, before);
    assert_eq!(
        flow.state(),
        &DeleteState::ErrorShown {
            message: "You do not have permission to perform this action.".to_string()
        }
    );

    flow.dismiss();
    assert_eq!(flow.state(), &DeleteState::Idle);
}

#[tokio::test]
async fn test_run_delete_without_pending_confirmation_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let mut books = common::sample_books();
    let mut flow = DeleteFlow::new();

    let outcome = flow
        .run_delete(&client, &SessionToken::new("abc"), &mut books)
        .await;

    assert!(outcome.is_none());
    assert_eq!(books.len(), 3);
    mock.assert_async().await;
}
