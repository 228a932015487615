//! Integration tests for the map engine.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod interaction_tests;
