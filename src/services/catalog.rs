//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
    repository::Repository,
};

const LIST_FAILURE: &str = "Error al conectar a la base de datos";
const INSERT_FAILURE: &str = "Error al insertar en la base de datos";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all book records
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository
            .books
            .list()
            .await
            .map_err(|e| AppError::catalog(e, LIST_FAILURE))
    }

    /// Insert a new book record
    pub async fn add_book(&self, book: NewBook) -> AppResult<()> {
        self.repository
            .books
            .insert(&book)
            .await
            .map_err(|e| AppError::catalog(e, INSERT_FAILURE))
    }
}
