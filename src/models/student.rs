//! Student account model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Student account as stored in the `estudiantes` table.
///
/// The stored password hash is never serialized into responses.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Student {
    #[serde(rename = "Identificacion")]
    pub identification: String,
    #[serde(rename = "Nombre_y_Apellidos")]
    pub full_name: String,
    #[serde(rename = "Correo_Electronico")]
    pub email: String,
    #[serde(rename = "Numero_Telefonico")]
    pub phone: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Student registration request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterStudent {
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "nombre")]
    pub full_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contraseña")]
    pub password: String,
}

/// Student login request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "contraseña")]
    pub password: String,
}
