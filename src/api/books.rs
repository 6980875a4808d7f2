//! Book catalog endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
    AppState,
};

/// List all book records
#[utoipa::path(
    get,
    path = "/get-data",
    tag = "books",
    responses(
        (status = 200, description = "All book records", body = Vec<Book>),
        (status = 500, description = "Database failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_data(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Insert a new book record
#[utoipa::path(
    post,
    path = "/add-book",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book inserted", body = String, content_type = "text/plain"),
        (status = 500, description = "Database failure", body = String, content_type = "text/plain")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    Json(book): Json<NewBook>,
) -> AppResult<&'static str> {
    state.services.catalog.add_book(book).await?;
    Ok("Libro agregado exitosamente.")
}
