//! Welcome route

use axum::Json;
use serde_json::{json, Value};

/// Static description of the book endpoints
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Books API",
        "endpoints": {
            "GET /books": "Get all books",
            "GET /books/:id": "Get single book",
            "POST /books": "Create new book",
            "PUT /books/:id": "Update book",
            "DELETE /books/:id": "Delete book"
        }
    }))
}
