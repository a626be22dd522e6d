//! Application layer: use-case services orchestrating the domain.

pub mod services;
