//! HTTP request handlers.

mod favorites;
mod health;
mod movies;

pub use favorites::{add_favorite_handler, list_favorites_handler, remove_favorite_handler};
pub use health::health_handler;
pub use movies::{
    genres_handler, movie_detail_handler, movies_by_genre_handler, search_handler,
    trending_handler,
};
