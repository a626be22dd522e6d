//! Infrastructure layer: external integrations behind domain traits.

pub mod cache;
pub mod persistence;
pub mod provider;
pub mod tmdb;
