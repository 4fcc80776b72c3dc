use libawesome_client::prelude::*;
use libawesome_client::utils::config::get_env_or_none;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();

    let config = Config::new();
    info!("Using API host {}", config.rest_api.base_url);

    // A bad host is a deployment defect: stop before any request is made.
    let client = match HttpClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let username: String = get_env_or_none("LIBAWESOME_USERNAME").unwrap_or_default();
    let password: String = get_env_or_none("LIBAWESOME_PASSWORD").unwrap_or_default();
    let credentials = Credentials::new(username, password);

    let login = client.login(&credentials).await;
    let legacy = OperationResult::from(login.clone());
    info!("Login result: {}", legacy);

    let Ok(token) = login else {
        return ExitCode::FAILURE;
    };

    let Some(book_id) = get_env_or_none::<BookId>("LIBAWESOME_DELETE_BOOK_ID") else {
        info!("LIBAWESOME_DELETE_BOOK_ID not set, nothing to delete");
        return ExitCode::SUCCESS;
    };

    let mut books = BookList::new(vec![Book::new(book_id, "Book to delete", vec![])]);
    let mut flow = DeleteFlow::new();
    flow.request(&books, book_id);
    if let Some(prompt) = flow.prompt() {
        info!("{prompt}? Confirming");
    }

    match flow.run_delete(&client, &token, &mut books).await {
        Some(Ok(())) => {
            info!("Deleted, {} books left locally", books.len());
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            let shown = serde_json::to_string(&OperationResult::from(Err::<(), _>(e)))
                .unwrap_or_default();
            error!("Delete failed: {shown}");
            ExitCode::FAILURE
        }
        None => ExitCode::FAILURE,
    }
}
