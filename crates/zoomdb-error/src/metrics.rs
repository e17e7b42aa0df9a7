//! Per-kind error counters.
//!
//! Enabled with `feature = "metrics"`. Every `ZError` construction costs one
//! `AtomicU64::fetch_add(1, Relaxed)` on its kind's slot.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::ErrorKind;

static COUNTERS: [AtomicU64; ErrorKind::COUNT] = {
    const ZERO: AtomicU64 = AtomicU64::new(0);
    [ZERO; ErrorKind::COUNT]
};

/// Increment the counter for `kind`. Returns the previous count.
#[inline(always)]
pub fn bump(kind: ErrorKind) -> u64 {
    COUNTERS[kind as usize].fetch_add(1, Ordering::Relaxed)
}

#[inline]
pub fn count(kind: ErrorKind) -> u64 {
    COUNTERS[kind as usize].load(Ordering::Relaxed)
}

/// Reset one counter. Returns the old value.
pub fn reset(kind: ErrorKind) -> u64 {
    COUNTERS[kind as usize].swap(0, Ordering::Relaxed)
}

pub fn reset_all() {
    for counter in COUNTERS.iter() {
        counter.store(0, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSnapshot {
    pub kind: ErrorKind,
    pub count: u64,
}

/// All non-zero counters, in code order.
pub fn dump() -> Vec<KindSnapshot> {
    ErrorKind::ALL
        .iter()
        .map(|&kind| KindSnapshot {
            kind,
            count: count(kind),
        })
        .filter(|s| s.count > 0)
        .collect()
}

pub fn dump_string() -> String {
    let mut out = String::new();
    for snap in dump() {
        out.push_str(&format!(
            "[{:>2}] count={:<10} kind={}\n",
            snap.kind.code(),
            snap.count,
            snap.kind.label()
        ));
    }
    out
}

/// Counters in Prometheus exposition format.
pub fn dump_prometheus() -> String {
    let mut out = String::from(
        "# HELP zoomdb_errors_total Errors constructed, by category\n\
         # TYPE zoomdb_errors_total counter\n",
    );
    for snap in dump() {
        out.push_str(&format!(
            "zoomdb_errors_total{{kind=\"{}\",code=\"{}\"}} {}\n",
            snap.kind.label(),
            snap.kind.code(),
            snap.count
        ));
    }
    out
}
