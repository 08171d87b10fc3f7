//! Shared test utilities

pub mod loader;

pub use loader::StaticLoader;
