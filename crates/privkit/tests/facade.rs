#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use privkit::internal::access::{PermissionSet, INTERNAL_ACCESS};
use privkit::{get_internal_config, validate_internal_access, MetricsRecorder};

#[test]
fn facade_exposes_the_three_pieces() {
    assert_eq!(get_internal_config().flags().to_map().len(), 3);

    let perms = PermissionSet::new().with(INTERNAL_ACCESS, true);
    assert!(validate_internal_access("internal_ops", &perms));

    let m = MetricsRecorder::new();
    m.record("x", 1.0);
    assert_eq!(m.get_all()["x"], 1.0);
}
