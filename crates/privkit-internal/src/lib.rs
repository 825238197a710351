//! privkit internal library entry.
//!
//! Internal-only config, the internal-user access check, and the metrics
//! table, plus the shared state the demo binary wires them into. Consumed by
//! the binary (`main.rs`), the `privkit` facade, and integration tests.

pub mod access;
pub mod config;
pub mod obs;
pub mod state;
