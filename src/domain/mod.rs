//! Domain layer containing business entities and contracts.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities, the movie provider contract, and repository
//! interfaces independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`provider`] - The polymorphic movie provider contract and its error taxonomy
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The provider trait is implemented identically by the base TMDB adapter and
//!   by the caching/logging decorators (see [`crate::infrastructure`])
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod provider;
pub mod repositories;
