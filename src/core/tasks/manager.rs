use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::Book,
    library::ShelfClient,
};

/// Runs backend calls off the UI thread and hands results back through a
/// channel polled once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn check_backend_connection(&self, client: ShelfClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { client.check_connection().await });

            let _ = sender.send(TaskResult::BackendConnection(connected));
        });
    }

    pub fn load_books(&self, client: ShelfClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Loading your shelf...".to_string()));

            let result = runtime
                .block_on(async { client.load_books().await })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::BooksLoaded(result));
        });
    }

    pub fn load_cards(&self, client: ShelfClient, book: Book) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender
                .send(TaskResult::LoadingMessage(format!("Loading vocab for {}...", book.title)));

            let result = runtime
                .block_on(async { client.load_cards(&book.id).await })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::CardsLoaded { book, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
