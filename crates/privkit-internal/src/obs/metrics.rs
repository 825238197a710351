//! Internal metrics table.
//!
//! One latest `f64` per metric name, backed by `DashMap` so the recorder can be
//! shared across threads. Recording a name again replaces its value and no
//! history is kept. Counters go through `increment`, which updates in place.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use dashmap::DashMap;

/// Prefix applied to metric names in the text exposition.
const RENDER_PREFIX: &str = "internal_";

#[derive(Debug, Default)]
pub struct MetricsRecorder {
    table: DashMap<String, f64>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, overwriting any earlier value.
    pub fn record(&self, name: impl Into<String>, value: f64) {
        self.table.insert(name.into(), value);
    }

    /// Add `delta` to `name` (starting from zero) and return the new value.
    ///
    /// The read and the write happen under the entry's shard lock, so
    /// concurrent increments never publish a stale total.
    pub fn increment(&self, name: impl Into<String>, delta: f64) -> f64 {
        let mut entry = self.table.entry(name.into()).or_insert(0.0);
        *entry += delta;
        *entry
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.table.get(name).map(|v| *v)
    }

    /// Owned copy of the whole table, ordered by name.
    pub fn get_all(&self) -> BTreeMap<String, f64> {
        self.table
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Render every metric as a gauge in Prometheus text exposition format.
    ///
    /// Names that sanitize to the same series are emitted once: the
    /// lexicographically first raw name wins and the rest are skipped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut seen = HashSet::new();
        for (raw, value) in self.get_all() {
            let name = exposition_name(&raw);
            if !seen.insert(name.clone()) {
                tracing::warn!(metric = %raw, series = %name, "metric name collides after sanitizing; skipped");
                continue;
            }
            let _ = writeln!(out, "# TYPE {} gauge", name);
            let _ = writeln!(out, "{} {}", name, exposition_value(value));
        }
        out
    }
}

/// Prefix the name and map characters outside `[A-Za-z0-9_:]` to `_`.
fn exposition_name(name: &str) -> String {
    let mut out = String::with_capacity(RENDER_PREFIX.len() + name.len());
    out.push_str(RENDER_PREFIX);
    out.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' || c == ':' {
            c
        } else {
            '_'
        }
    }));
    out
}

fn exposition_value(v: f64) -> String {
    if v.is_infinite() {
        if v > 0.0 { "+Inf".into() } else { "-Inf".into() }
    } else {
        v.to_string()
    }
}
