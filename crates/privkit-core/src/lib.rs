//! privkit core: the error surface shared by the internal crates.
//!
//! Everything fallible in privkit reports through [`PrivkitError`]. The
//! crate carries no runtime dependencies beyond `thiserror`.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;

pub use error::{ErrorCode, PrivkitError, Result};
