//! Shared internal state: one config snapshot plus one metrics recorder.
//!
//! Built explicitly from a [`ConfigSnapshot`] and handed to callers; cloning is
//! cheap and every clone sees the same recorder.

use std::sync::Arc;

use crate::access::{evaluate_internal_access, AccessDecision, PermissionSet};
use crate::config::ConfigSnapshot;
use crate::obs::MetricsRecorder;

pub const METRIC_ACCESS_GRANTED: &str = "access_granted_total";
pub const METRIC_ACCESS_DENIED: &str = "access_denied_total";
pub const METRIC_FLAGS_ENABLED: &str = "config_flags_enabled";

#[derive(Clone)]
pub struct InternalState {
    inner: Arc<InternalStateInner>,
}

struct InternalStateInner {
    cfg: ConfigSnapshot,
    metrics: MetricsRecorder,
}

impl InternalState {
    pub fn new(cfg: ConfigSnapshot) -> Self {
        let metrics = MetricsRecorder::new();
        metrics.record(METRIC_FLAGS_ENABLED, cfg.flags().enabled_count() as f64);

        tracing::info!(
            db_host = %cfg.db_host(),
            debug_mode = cfg.flags().enable_debug_mode,
            monitoring = cfg.flags().internal_monitoring,
            admin_panel = cfg.flags().admin_panel_access,
            "internal state ready"
        );

        Self {
            inner: Arc::new(InternalStateInner {
                cfg,
                metrics,
            }),
        }
    }

    pub fn cfg(&self) -> &ConfigSnapshot {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.inner.metrics
    }

    /// Run the internal access check and publish the running totals.
    pub fn check_access(&self, user_id: &str, permissions: &PermissionSet) -> AccessDecision {
        let decision = evaluate_internal_access(user_id, permissions);

        let metric = if decision.is_granted() {
            METRIC_ACCESS_GRANTED
        } else {
            METRIC_ACCESS_DENIED
        };
        self.inner.metrics.increment(metric, 1.0);

        tracing::debug!(user_id, decision = decision.as_str(), "internal access check");
        decision
    }
}
