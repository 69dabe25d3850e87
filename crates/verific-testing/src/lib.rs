//! Testing infrastructure for verific integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Checks over the CLI's JSON envelope
//! - `fixtures`: Sample activity and registration records

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
