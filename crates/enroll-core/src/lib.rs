pub mod auth;
pub mod catalog;
pub mod config;
pub mod events;
pub mod models;
pub mod runtime;
pub mod tracing_setup;

pub use auth::{AuthError, AuthProvider, InMemoryAuth};
pub use catalog::{CatalogError, InMemoryCatalog};
