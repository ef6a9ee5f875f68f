use sklock::{Builder, SkipList};

fn main() {
  let mut list = Builder::new()
    .with_max_level(4)
    .with_seed(42)
    .build::<u32, String>()
    .unwrap();

  for (k, v) in [(10, "ten"), (60, "sixty"), (30, "thirty"), (20, "twenty"), (90, "ninety")] {
    list.set(k, v.to_string());
  }

  // Updating through the returned entry; the write lock is held until it drops.
  list.set(30, "thirty".to_string()).value_mut().push('!');
  assert_eq!(list.get_cloned(&30).as_deref(), Some("thirty!"));

  assert_eq!(list.remove_by_filter(&10).unwrap().value(), "ten");
  assert!(list.remove(&0).is_none());

  let mut cur = list.front();
  while let Some(node) = cur {
    println!("{} => {}", node.key(), node.value());
    cur = node.next();
  }

  let first = list.remove_front().unwrap();
  assert_eq!(first.into_parts(), (20, "twenty".to_string()));
  assert_eq!(list.len(), 3);

  let rest: SkipList<u32, String> = list.into_iter().filter(|(k, _)| *k > 50).collect();
  println!("{rest:?}");
}
