//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding the stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with the sample books loaded
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::seeded(),
        }
    }

    /// Create a repository with no books
    pub fn empty() -> Self {
        Self {
            books: books::BooksRepository::empty(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
