//! Command implementations for the expenses CLI

pub mod serve;

pub use serve::run_serve;
