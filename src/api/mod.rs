//! API handlers for the REST endpoints

pub mod accounts;
pub mod books;
pub mod health;
pub mod openapi;
