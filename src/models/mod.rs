//! Data models for the Books API

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookId, CreateBook, UpdateBook};
