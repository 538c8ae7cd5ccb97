//! # Testloom
//!
//! Test scaffolding generator for React and React Native sources.
//!
//! This crate re-exports the testloom sub-crates for unified documentation
//! and embedding; the binary target provides the command-line interface.
//!
//! ## Crates
//!
//! - [`kit`] - shared string and naming utilities
//! - [`analysis`] - static analysis of components, props, hooks and signatures
//! - [`scaffold`] - test-file boilerplate emission

/// Shared string and naming utilities.
pub use testloom_kit as kit;

/// Static analysis of components, props, hooks and signatures.
pub use testloom_analysis as analysis;

/// Test-file boilerplate emission.
pub use testloom_scaffold as scaffold;
