//! TMDB HTTP integration: the transport client, response mappers, and the
//! base [`MovieProvider`](crate::domain::provider::MovieProvider) adapter.

mod adapter;
mod client;
mod mapper;

pub use adapter::TmdbMovieAdapter;
pub use client::{TmdbClient, TmdbResponse};
