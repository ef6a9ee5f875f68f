use integration::{join_all, key, new_value, seeded_list};
use std::sync::Arc;

const N: usize = 1000;
const THREADS: usize = 8;

fn main() {
  for max_level in [1, 4, 18] {
    let l = Arc::new(seeded_list(max_level, 7));

    // Each writer owns the keys congruent to its index.
    let writers: Vec<_> = (0..THREADS)
      .map(|t| {
        let l = l.clone();
        std::thread::spawn(move || {
          for i in (t..N).step_by(THREADS) {
            l.set(key(i), new_value(i));
          }
        })
      })
      .collect();
    join_all(writers);
    assert_eq!(N, l.len());

    // Readers check the even keys while removers take out the odd ones.
    let readers = (0..THREADS).map(|_| {
      let l = l.clone();
      std::thread::spawn(move || {
        for i in (0..N).step_by(2) {
          assert_eq!(l.get_cloned(&key(i)), Some(new_value(i)), "broken: {i}");
        }
      })
    });
    let removers = (0..THREADS).map(|t| {
      let l = l.clone();
      std::thread::spawn(move || {
        for i in (1 + 2 * t..N).step_by(2 * THREADS) {
          let (k, v) = l.remove_by_filter(&key(i)).unwrap().into_parts();
          assert_eq!((k, v), (key(i), new_value(i)), "broken: {i}");
        }
      })
    });
    let handles: Vec<_> = readers.chain(removers).collect();
    join_all(handles);

    assert_eq!(N / 2, l.len());
    let view = l.read();
    assert!(view.iter().map(|(k, _)| k.clone()).eq((0..N).step_by(2).map(key)));
  }
}
