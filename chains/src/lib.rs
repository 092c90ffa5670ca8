//! Sequence utilities around runs of equal adjacent elements.
//!
//! - [`run`]: pure search and swap logic. No I/O, deterministic, fully
//!   testable in isolation.
//! - [`input`]: console parsing and random generation used by the CLI.

pub mod input;
pub mod logging;
pub mod run;
