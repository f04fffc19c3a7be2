//! Book endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::{BookIdPath, JsonBody};

/// Envelope for a single book
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Book,
}

/// Envelope for the book list
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    /// Number of books in `data`
    pub count: usize,
    pub data: Vec<Book>,
}

impl BookResponse {
    fn new(data: Book) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    fn with_message(message: &str, data: Book) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
        }
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.books.list().await?;
    Ok(Json(BookListResponse {
        success: true,
        count: books.len(),
        data: books,
    }))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get_by_id(&id).await?;
    Ok(Json(BookResponse::new(book)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.services.books.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookResponse::with_message("Book created successfully", book)),
    ))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.update(&id, &data).await?;
    Ok(Json(BookResponse::with_message("Book updated successfully", book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted, returned in `data`", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    BookIdPath(id): BookIdPath,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.delete(&id).await?;
    Ok(Json(BookResponse::with_message("Book deleted successfully", book)))
}
