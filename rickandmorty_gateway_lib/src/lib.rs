//! Gateway layer for the Rick and Morty character API: axum handlers, error
//! envelopes, input sanitization, and router assembly.
//!
//! Handlers talk to the upstream through the [`CharacterSource`] capability,
//! implemented for the `rickandmorty_api` client and swappable in tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod source;
pub mod validation;

pub use rickandmorty_api;
pub use rickandmorty_api::types;

pub use config::GatewayConfig;
pub use error::{ErrorResponse, GatewayError};
pub use handlers::AppState;
pub use router::router;
pub use source::{CharacterSource, SourceError};
