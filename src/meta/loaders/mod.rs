//! Concrete resource loaders

pub mod classpath;

pub use classpath::ClasspathLoader;
