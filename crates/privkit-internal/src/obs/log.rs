//! `[INTERNAL-{level}] {message}` console lines.
//!
//! These lines go straight to stdout and are independent of `tracing`. They
//! never fail from the caller's point of view: write errors are dropped.

use std::io::{self, Write};

pub const DEFAULT_LEVEL: &str = "INFO";

pub fn format_internal_log(level: &str, message: &str) -> String {
    format!("[INTERNAL-{level}] {message}")
}

/// Write one line to an arbitrary sink.
pub fn write_internal_log<W: Write>(out: &mut W, level: &str, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format_internal_log(level, message))
}

/// Print `message` at the default `INFO` level.
pub fn internal_log(message: &str) {
    internal_log_at(DEFAULT_LEVEL, message);
}

pub fn internal_log_at(level: &str, message: &str) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write_internal_log(&mut out, level, message);
}
