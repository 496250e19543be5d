//! Integration tests for ember_foundation.
//!
//! Tests for the error taxonomy and the Duration value type.

mod duration_tests;
mod error_tests;
