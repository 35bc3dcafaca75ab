//! Integration tests for loadmark
//!
//! Library scenarios run against the public API; CLI tests run the built
//! binary against session files in a temporary directory.

mod helpers;

mod cli_test;
