pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::YomitomoError;
pub use models::{
    Book,
    StrokeCount,
    VocabCard,
};
