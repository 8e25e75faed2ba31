//! Split the files of a directory into numbered sub-directories at
//! user-recorded marker filenames.
//!
//! The `add` command appends marker filenames to a `.split` list in the
//! working directory; the `split` command partitions every other file at
//! those markers and moves each partition into its own `split_<i>`
//! directory. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (the partitioner). No I/O,
//!   fully testable in isolation.
//! - **[`io`]**: Side-effecting filesystem operations (marker list,
//!   directory scan). All helpers take explicit paths so tests can point
//!   them at temporary directories.
//!
//! Orchestration modules ([`add`], [`split`]) coordinate core logic with
//! I/O to implement the CLI commands. Failures are kind-tagged in
//! [`error::Error`]; the mapping to process exit codes lives in
//! [`exit_codes`] and is applied only by the binary.

pub mod add;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod split;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, Result};
