//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link times down.
//!
//! Structure:
//! - integration: Multi-step gesture and app workflows
//! - unit: Single-component tests against the public API

mod integration;
mod unit;
