//! Command implementations for the codevault CLI

pub mod serve;

pub use serve::run_serve;
