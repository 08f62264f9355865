//! Tests for wrapper generation

mod integration;
