use integration::{join_all, key, new_value, seeded_list};
use std::sync::Arc;

fn main() {
  const N: usize = 10_000;
  const THREADS: usize = 8;

  for max_level in [1, 4, 18] {
    let l = Arc::new(seeded_list(max_level, max_level as u64));
    for i in (0..N).rev() {
      l.set(key(i), new_value(i));
    }
    assert!(l.height() <= max_level);

    let handles: Vec<_> = (0..THREADS)
      .map(|_| {
        let l = l.clone();
        std::thread::spawn(move || {
          let mut popped = Vec::new();
          while let Some(ent) = l.remove_front() {
            let (k, v) = ent.into_parts();
            assert_eq!(k, v, "broken: {k}");
            popped.push(k);
          }
          popped
        })
      })
      .collect();

    let mut all: Vec<String> = join_all(handles).into_iter().flatten().collect();
    all.sort();
    assert!(all.into_iter().eq((0..N).map(key)));
    assert!(l.is_empty());
    assert_eq!(l.height(), 1);
  }
}
