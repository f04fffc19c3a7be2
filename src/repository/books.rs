//! In-memory book store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Books in insertion order plus the next id to hand out.
#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: i64,
}

/// Shared handle on the book store.
///
/// Clones share the same shelf. Every mutation holds the write lock for its whole
/// find-then-modify sequence, so ids are handed out exactly once.
#[derive(Clone, Debug)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl BooksRepository {
    /// Store holding "1984" (id 1) and "To Kill a Mockingbird" (id 2)
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book {
                id: 1,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
            },
            Book {
                id: 2,
                title: "To Kill a Mockingbird".to_string(),
                author: "Harper Lee".to_string(),
            },
        ])
    }

    pub fn empty() -> Self {
        Self::with_books(Vec::new())
    }

    fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: Arc::new(RwLock::new(Shelf { books, next_id })),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Shelf>> {
        self.shelf
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Shelf>> {
        self.shelf
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// All books in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    pub fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    /// Append a book under the next id
    pub fn insert(&self, title: &str, author: &str) -> AppResult<Book> {
        let mut shelf = self.write()?;
        let book = Book {
            id: shelf.next_id,
            title: title.to_string(),
            author: author.to_string(),
        };
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        Ok(book)
    }

    /// Replace the book in place, keeping the current value for any field not given.
    /// Returns `None` when no book has this id.
    pub fn replace(
        &self,
        id: i64,
        title: Option<&str>,
        author: Option<&str>,
    ) -> AppResult<Option<Book>> {
        let mut shelf = self.write()?;
        let Some(slot) = shelf.books.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        *slot = Book {
            id,
            title: title.map_or_else(|| slot.title.clone(), str::to_string),
            author: author.map_or_else(|| slot.author.clone(), str::to_string),
        };
        Ok(Some(slot.clone()))
    }

    /// Remove and return the book, or `None` when no book has this id
    pub fn remove_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let mut shelf = self.write()?;
        let index = shelf.books.iter().position(|b| b.id == id);
        Ok(index.map(|index| shelf.books.remove(index)))
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.books.len())
    }
}
