//! Command implementations for the userctl CLI

pub mod serve;

pub use serve::run_serve;
