pub mod filter;
pub mod navigator;

#[cfg(test)]
mod navigator_tests;

pub use filter::JlptFilter;
pub use navigator::{
    Navigator,
    Side,
    StudyMode,
};
