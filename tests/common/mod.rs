//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Barrier};
use std::thread;

pub fn assert_send_sync<T: Send + Sync>() {}

/// Runs `per_thread(thread_index)` on `threads` OS threads that are released
/// together by a barrier, then joins them all and returns their results in
/// thread order.
pub fn hammer<S, R, F>(shared: &Arc<S>, threads: usize, per_thread: F) -> Vec<R>
where
    S: Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(&S, usize) -> R + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(threads));
    let per_thread = Arc::new(per_thread);

    let handles: Vec<_> = (0..threads)
        .map(|idx| {
            let shared = Arc::clone(shared);
            let barrier = Arc::clone(&barrier);
            let per_thread = Arc::clone(&per_thread);
            thread::spawn(move || {
                barrier.wait();
                per_thread(&shared, idx)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .collect()
}
