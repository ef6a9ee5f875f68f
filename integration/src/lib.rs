use std::thread::JoinHandle;

use sklock::{Builder, SkipList};

/// Only used for testing
pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

/// Only used for testing
pub fn new_value(i: usize) -> String {
  format!("{:05}", i)
}

/// Only used for testing
pub fn seeded_list(max_level: usize, seed: u64) -> SkipList<String, String> {
  Builder::new()
    .with_max_level(max_level)
    .with_seed(seed)
    .build()
    .unwrap()
}

/// Joins every worker, re-raising the first panic of any of them.
pub fn join_all<T>(handles: impl IntoIterator<Item = JoinHandle<T>>) -> Vec<T> {
  let mut out = Vec::new();
  let mut panic = None;
  for h in handles {
    match h.join() {
      Ok(v) => out.push(v),
      Err(e) => {
        panic.get_or_insert(e);
      }
    }
  }

  if let Some(e) = panic {
    std::panic::resume_unwind(e);
  }
  out
}
