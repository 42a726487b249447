use anyhow::Context;
use std::sync::Arc;

use bookshelf::log_info;
use bookshelf::modules::book::{application::seed, BookRepositoryImpl, BookService};
use bookshelf::server::{router, AppState};
use bookshelf::shared::utils::logger::init_logger;
use bookshelf::shared::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new().context("Failed to initialize database")?);
    database
        .run_migrations()
        .context("Failed to run database migrations")?;

    let book_repo = Arc::new(BookRepositoryImpl::new(Arc::clone(&database)));
    let book_service = Arc::new(BookService::new(book_repo));

    // `bookshelf seed` populates an empty catalog and exits
    if std::env::args().nth(1).as_deref() == Some("seed") {
        seed::run(&book_service).await.context("Seeding failed")?;
        return Ok(());
    }

    let state = AppState {
        books: book_service,
    };

    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    log_info!("Listening on http://{}", addr);

    axum::serve(listener, router::init(state))
        .await
        .context("Server error")?;

    Ok(())
}
