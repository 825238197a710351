#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use privkit_internal::obs::MetricsRecorder;

#[test]
fn last_write_wins() {
    let m = MetricsRecorder::new();
    m.record("x", 1.0);
    m.record("x", 2.0);

    let mut expected = BTreeMap::new();
    expected.insert("x".to_string(), 2.0);
    assert_eq!(m.get_all(), expected);
    assert_eq!(m.len(), 1);
}

#[test]
fn get_all_is_a_copy() {
    let m = MetricsRecorder::new();
    m.record("requests", 10.0);

    let mut snapshot = m.get_all();
    snapshot.insert("requests".to_string(), 99.0);
    snapshot.insert("bogus".to_string(), 1.0);

    let again = m.get_all();
    assert_eq!(again.len(), 1);
    assert_eq!(again["requests"], 10.0);
}

#[test]
fn empty_recorder() {
    let m = MetricsRecorder::new();
    assert!(m.is_empty());
    assert!(m.get_all().is_empty());
    assert_eq!(m.get("missing"), None);
}

#[test]
fn concurrent_records_keep_every_key() {
    let m = Arc::new(MetricsRecorder::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                for i in 0..100 {
                    m.record(format!("t{t}_m{i}"), i as f64);
                    m.record("shared", t as f64);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let all = m.get_all();
    assert_eq!(all.len(), 8 * 100 + 1);
    assert_eq!(all["t3_m42"], 42.0);
    assert!((0.0..8.0).contains(&all["shared"]));
}
