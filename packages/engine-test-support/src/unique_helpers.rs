//! Test helpers for generating unique test data
//!
//! Record and score identifiers are plain integers in the external store;
//! handing each test its own range keeps fixtures from colliding when
//! batches are merged.

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1_000);

/// Generate a process-unique identifier suitable for member or score ids.
pub fn unique_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Generate a block of `count` consecutive unique identifiers.
pub fn unique_id_block(count: i64) -> std::ops::Range<i64> {
    let start = NEXT_ID.fetch_add(count, Ordering::Relaxed);
    start..start + count
}
