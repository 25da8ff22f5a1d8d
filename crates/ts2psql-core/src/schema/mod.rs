//! Schema building
//!
//! Turns source text into `Declaration` models: blocks are scanned, their
//! properties scanned, metadata decoded and default names applied.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::*;
