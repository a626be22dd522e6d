//! Provider decorators.
//!
//! Both decorators wrap an `Arc<dyn MovieProvider>` and implement the same
//! trait, so they compose in any order. The composition root stacks them as
//! `Logged(Cached(TmdbMovieAdapter))`: the logging layer sits outermost so
//! cache hits are logged with the same shape as real upstream calls.

mod cached;
mod logged;

pub use cached::CachedMovieProvider;
pub use logged::LoggedMovieProvider;
