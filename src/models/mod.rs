//! Data models for persisted entities and request/response payloads

pub mod book;
pub mod student;
