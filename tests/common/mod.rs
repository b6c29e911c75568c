//! Shared test utilities for delimlog integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Formatters built here use a frozen clock so payloads are
//! deterministic.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
