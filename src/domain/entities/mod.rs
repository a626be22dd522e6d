//! Core domain entities representing the movie data model.
//!
//! Entities are plain data structures without business logic. Movie data is
//! constructed exclusively by the response mappers from upstream payloads and
//! never mutated after construction.
//!
//! # Entity Types
//!
//! - [`Movie`] - A movie summary as returned by list endpoints
//! - [`MovieDetail`] - Full movie detail (summary plus detail-only fields)
//! - [`Genre`] - A movie genre
//! - [`Page`] - A page of upstream results with pagination metadata
//! - [`FavoriteRecord`] - A user's favorited movie with its frozen snapshot

pub mod favorite;
pub mod genre;
pub mod movie;
pub mod page;

pub use favorite::FavoriteRecord;
pub use genre::Genre;
pub use movie::{Movie, MovieDetail, ProductionCompany, ProductionCountry, SpokenLanguage};
pub use page::Page;
