//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, CreateBook, UpdateBook},
    repository::Repository,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both title and author";

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

fn not_found(id: &BookId) -> AppError {
    tracing::debug!(%id, "book not found");
    AppError::NotFound(format!("Book with ID {} not found", id))
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list()
    }

    pub async fn count(&self) -> AppResult<usize> {
        self.repository.books.count()
    }

    pub async fn get_by_id(&self, id: &BookId) -> AppResult<Book> {
        let found = match id.value() {
            Some(value) => self.repository.books.find_by_id(value)?,
            None => None,
        };
        found.ok_or_else(|| not_found(id))
    }

    /// Create a book; title and author are both required and non-empty
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let (title, author) = data
            .required_fields()
            .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

        let book = self.repository.books.insert(title, author)?;
        tracing::info!(id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Update a book, keeping current values for fields that are absent or empty
    pub async fn update(&self, id: &BookId, data: &UpdateBook) -> AppResult<Book> {
        let updated = match id.value() {
            Some(value) => self
                .repository
                .books
                .replace(value, data.title(), data.author())?,
            None => None,
        };
        let book = updated.ok_or_else(|| not_found(id))?;
        tracing::info!(id = book.id, "book updated");
        Ok(book)
    }

    /// Delete a book and return it
    pub async fn delete(&self, id: &BookId) -> AppResult<Book> {
        let removed = match id.value() {
            Some(value) => self.repository.books.remove_by_id(value)?,
            None => None,
        };
        let book = removed.ok_or_else(|| not_found(id))?;
        tracing::info!(id = book.id, "book deleted");
        Ok(book)
    }
}
