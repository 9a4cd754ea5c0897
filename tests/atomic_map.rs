mod common;

use atomkit::AtomicMap;
use common::{assert_send_sync, hammer};
use std::sync::Arc;

/// A key that can hold either a name or a number, so one map can be keyed by both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Name(&'static str),
    Id(i64),
}

#[test]
fn mixed_key_walkthrough() {
    let m = AtomicMap::new();

    m.set(Key::Name("test"), true);
    assert_eq!(m.get(&Key::Name("test")), Some(true));

    m.set(Key::Id(123), false);
    assert_eq!(m.get(&Key::Id(123)), Some(false));
    m.del(&Key::Id(123));
    assert_eq!(m.get(&Key::Id(123)), None);

    assert_eq!(m.len(), 1);
}

#[test]
fn absent_key_contract() {
    let m: AtomicMap<&str, u32> = AtomicMap::new();
    assert_eq!(m.get("missing"), None);

    m.set("k", 7);
    assert_eq!(m.get("k"), Some(7));

    m.del("k");
    assert_eq!(m.get("k"), None);

    // Removing something that is not there is fine.
    m.del("k");
    m.del("never-set");
    assert!(m.is_empty());
}

#[test]
fn zero_value_is_empty() {
    let m: AtomicMap<String, Vec<u8>> = AtomicMap::default();
    assert_eq!(m.len(), 0);
    assert!(m.values().is_empty());
    assert!(m.keys().is_empty());
}

#[test]
fn len_and_values_track_distinct_keys() {
    let m = AtomicMap::new();
    for i in 0..10 {
        m.set(i, i * 10);
    }
    m.set(3, 333);
    m.del(&0);
    m.del(&9);
    m.del(&42);

    assert_eq!(m.len(), 8);
    let mut values = m.values();
    assert_eq!(values.len(), 8);
    values.sort_unstable();
    assert_eq!(values, vec![10, 20, 40, 50, 60, 70, 80, 333]);
}

#[test]
fn values_are_snapshots() {
    let m = AtomicMap::new();
    m.set("a", String::from("before"));
    let snapshot = m.values();
    m.set("a", String::from("after"));
    assert_eq!(snapshot, vec![String::from("before")]);
    assert_eq!(m.get("a").as_deref(), Some("after"));
}

#[test]
fn into_inner_returns_entries() {
    let m = AtomicMap::new();
    m.set('x', 1_u8);
    let inner = m.into_inner();
    assert_eq!(inner.get(&'x'), Some(&1));
}

#[test]
fn map_is_send_sync() {
    assert_send_sync::<AtomicMap<String, u64>>();
    assert_send_sync::<AtomicMap<Key, Vec<String>>>();
}

#[test]
fn concurrent_disjoint_writers() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let m = Arc::new(AtomicMap::<(usize, usize), usize>::new());
    hammer(&m, THREADS, |m, idx| {
        for i in 0..PER_THREAD {
            m.set((idx, i), idx * PER_THREAD + i);
        }
        // Drop every other entry this thread wrote.
        for i in (0..PER_THREAD).step_by(2) {
            m.del(&(idx, i));
        }
    });

    assert_eq!(m.len(), THREADS * PER_THREAD / 2);
    assert_eq!(m.values().len(), m.len());
    assert_eq!(m.get(&(3, 1)), Some(3 * PER_THREAD + 1));
    assert_eq!(m.get(&(3, 2)), None);
}

#[test]
fn readers_run_alongside_writers() {
    let m = Arc::new(AtomicMap::<u32, u32>::new());
    let results = hammer(&m, 4, |m, idx| {
        if idx == 0 {
            for i in 0..1_000_u32 {
                m.set(i % 16, i);
            }
            0
        } else {
            // Len never exceeds the key space, whatever interleaving we see.
            (0..1_000).map(|_| m.len()).max().unwrap_or(0)
        }
    });
    assert!(results.into_iter().all(|len| len <= 16));
    assert_eq!(m.len(), 16);
}
