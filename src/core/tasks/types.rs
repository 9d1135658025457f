use crate::core::{
    Book,
    VocabCard,
};

/// Results sent back from background tasks to the egui update loop.
#[derive(Debug, Clone)]
pub enum TaskResult {
    BackendConnection(bool),
    BooksLoaded(Result<Vec<Book>, String>),
    CardsLoaded { book: Book, result: Result<Vec<VocabCard>, String> },
    LoadingMessage(String),
}
