pub mod router;

use crate::modules::book::application::BookService;
use std::sync::Arc;

/// State shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
}
