//! Black Box Tests for Vecta
//!
//! These tests only use the root public API - no internal crate access.
//! This simulates what an end user writing a conformance test would see.
