pub mod core;
pub mod flashcards;
pub mod gui;
pub mod library;
pub mod persistence;
