pub mod app;
pub mod error_modal;
pub mod flashcard_view;
pub mod message_overlay;
pub mod settings;
pub mod settings_modal;
pub mod shelf_view;
pub mod theme;
pub mod top_bar;
pub mod vocab_table;

pub use app::YomitomoApp;
