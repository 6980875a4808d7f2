//! Book (catalog entry) model and related types.
//!
//! The wire contract keeps the original Spanish field names
//! (`Titulo`, `Autor`, `Fecha`, `ISBN`); the Rust fields map to them
//! through serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record as stored in the `libro` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Autor")]
    pub author: String,
    /// Publication date
    #[serde(rename = "Fecha")]
    pub publication_date: NaiveDate,
    #[serde(rename = "ISBN")]
    pub isbn: String,
}

/// Book insertion request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewBook {
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Autor")]
    pub author: String,
    #[serde(rename = "Fecha")]
    pub publication_date: NaiveDate,
    #[serde(rename = "ISBN")]
    pub isbn: String,
}
