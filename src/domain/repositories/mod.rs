//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`FavoriteRepository`] - Per-user favorite movie snapshots
//! - [`TokenRepository`] - API token authentication

pub mod favorite_repository;
pub mod token_repository;

pub use favorite_repository::FavoriteRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
