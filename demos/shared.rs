use sklock::SkipList;
use std::sync::Arc;

pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

fn main() {
  const N: usize = 1000;
  const THREADS: usize = 4;

  let l = Arc::new(SkipList::new());

  let handles: Vec<_> = (0..THREADS)
    .map(|t| {
      let l = l.clone();
      std::thread::spawn(move || {
        for i in (t..N).step_by(THREADS) {
          l.insert(key(i), i);
        }
      })
    })
    .collect();
  for h in handles {
    h.join().unwrap();
  }

  // The view keeps the read lock, so writers wait until it is dropped.
  let view = l.read();
  assert_eq!(view.len(), N);
  for (i, (k, v)) in view.iter().enumerate() {
    assert_eq!((k, *v), (&key(i), i), "broken: {i}");
  }
  drop(view);

  while let Some(ent) = l.remove_front() {
    if *ent.value() % 100 == 0 {
      println!("popped {}", ent.key());
    }
  }
  assert!(l.is_empty());
}
