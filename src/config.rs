use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

/// Counters kept for every run of the driver.
pub const COUNTERS: [&str; 10] = [
    "push",
    "pop",
    "top",
    "size",
    "empty",
    "merge",
    "copy",
    "clear",
    "drain",
    "empty_container",
];

lazy_static! {
    ///how many times each event happened
    static ref TIMES: Mutex<BTreeMap<&'static str, usize>> = Mutex::new(BTreeMap::new());
}

fn times_table() -> MutexGuard<'static, BTreeMap<&'static str, usize>> {
    TIMES.lock().unwrap_or_else(PoisonError::into_inner)
}

///init: register every counter at zero, safe to call more than once
pub fn init() {
    let mut times = times_table();
    for name in COUNTERS {
        times.entry(name).or_insert(0);
    }
}

///record: count one more occurrence of `name`
pub fn record(name: &'static str) {
    *times_table().entry(name).or_insert(0) += 1;
}

///times: occurrences of `name` so far
pub fn times(name: &str) -> usize {
    times_table().get(name).copied().unwrap_or(0)
}

///dump: non-zero counters sorted by name, formatted as {name}: {count}
pub fn dump() -> Vec<String> {
    times_table()
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, count)| format!("{name}: {count}"))
        .collect()
}
