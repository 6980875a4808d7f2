//! Books repository for database operations
//!
//! Errors are returned raw; the service layer attaches the per-endpoint
//! public message.

use sqlx::{Pool, Postgres};

use crate::models::book::{Book, NewBook};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all book records
    pub async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT titulo AS title, autor AS author, fecha AS publication_date, isbn
            FROM libro
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a new book record
    pub async fn insert(&self, book: &NewBook) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO libro (titulo, autor, fecha, isbn)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_date)
        .bind(&book.isbn)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
