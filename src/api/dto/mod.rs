//! Data Transfer Objects for request validation and response shaping.

pub mod favorites;
pub mod health;
pub mod movies;

use serde::Serialize;

/// Standard success envelope: every successful response wraps its payload in
/// a `data` field.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
