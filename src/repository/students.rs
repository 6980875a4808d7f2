//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::models::student::{RegisterStudent, Student};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a student account by identification
    pub async fn get_by_identification(
        &self,
        identification: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT identificacion AS identification,
                   nombre_y_apellidos AS full_name,
                   correo_electronico AS email,
                   numero_telefonico AS phone,
                   contrasena AS password_hash
            FROM estudiantes
            WHERE identificacion = $1
            "#,
        )
        .bind(identification)
        .fetch_optional(&self.pool)
        .await
    }

    /// Check if an identification is already registered
    pub async fn identification_exists(&self, identification: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM estudiantes WHERE identificacion = $1)",
        )
        .bind(identification)
        .fetch_one(&self.pool)
        .await
    }

    /// Insert a new student account with an already-hashed password.
    ///
    /// `identificacion` carries a UNIQUE constraint; a concurrent duplicate
    /// registration surfaces here as a unique violation rather than a second
    /// row.
    pub async fn insert(
        &self,
        student: &RegisterStudent,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO estudiantes (
                identificacion, nombre_y_apellidos, correo_electronico,
                numero_telefonico, contrasena
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&student.identification)
        .bind(&student.full_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
