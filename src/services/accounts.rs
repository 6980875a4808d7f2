//! Student account service: registration and login

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::student::{LoginRequest, RegisterStudent, Student},
    repository::Repository,
};

const ALREADY_REGISTERED: &str = "La identificación ya está registrada.";
const NOT_REGISTERED: &str = "La identificación no está registrada.";
const WRONG_PASSWORD: &str = "Contraseña incorrecta.";
const REGISTER_FAILURE: &str = "Error al registrar el estudiante.";
const LOGIN_FAILURE: &str = "Error al conectar con el servidor.";

#[derive(Clone)]
pub struct AccountsService {
    repository: Repository,
}

impl AccountsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new student account.
    ///
    /// The pre-insert existence check gives the common-path duplicate
    /// message; the UNIQUE constraint on the identification column is what
    /// actually closes the race, with the resulting unique violation mapped
    /// to the same 400 response.
    pub async fn register(&self, student: RegisterStudent) -> AppResult<()> {
        let exists = self
            .repository
            .students
            .identification_exists(&student.identification)
            .await
            .map_err(|e| AppError::account(e, REGISTER_FAILURE))?;

        if exists {
            return Err(AppError::BadRequest(ALREADY_REGISTERED.to_string()));
        }

        let password_hash = hash_password(&student.password).map_err(|e| AppError::Internal {
            detail: format!("Failed to hash password: {}", e),
            message: REGISTER_FAILURE,
        })?;

        match self.repository.students.insert(&student, &password_hash).await {
            Ok(()) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                Err(AppError::BadRequest(ALREADY_REGISTERED.to_string()))
            }
            Err(e) => Err(AppError::account(e, REGISTER_FAILURE)),
        }
    }

    /// Authenticate a student login and return the account on success
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<Student> {
        let student = self
            .repository
            .students
            .get_by_identification(&credentials.identification)
            .await
            .map_err(|e| AppError::account(e, LOGIN_FAILURE))?
            .ok_or_else(|| AppError::BadRequest(NOT_REGISTERED.to_string()))?;

        let password_valid = verify_password(&student.password_hash, &credentials.password)
            .map_err(|detail| AppError::Internal {
                detail,
                message: LOGIN_FAILURE,
            })?;

        if !password_valid {
            return Err(AppError::BadRequest(WRONG_PASSWORD.to_string()));
        }

        Ok(student)
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash
fn verify_password(hash: &str, password: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|e| e.is_unique_violation())
}
