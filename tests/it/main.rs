//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead.
//!
//! Structure:
//! - unit: Single-component unit tests
//! - integration: Multi-component workflow tests

mod helpers;
mod integration;
