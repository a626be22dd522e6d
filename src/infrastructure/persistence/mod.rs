//! PostgreSQL repository implementations.

mod pg_favorite_repository;
mod pg_token_repository;

pub use pg_favorite_repository::PgFavoriteRepository;
pub use pg_token_repository::PgTokenRepository;
