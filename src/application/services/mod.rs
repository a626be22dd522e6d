//! Use-case services.

mod auth_service;
mod favorite_service;
mod movie_service;

pub use auth_service::{AuthService, AuthenticatedUser};
pub use favorite_service::FavoriteService;
pub use movie_service::MovieService;
