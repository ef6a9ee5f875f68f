use criterion::*;
use parking_lot::RwLock;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sklock::*;
use std::{
  collections::*,
  sync::{atomic::*, *},
  thread,
};

fn skiplist_round(l: &SkipList<Vec<u8>, Vec<u8>>, case: &(Vec<u8>, bool), exp: &Vec<u8>) {
  if case.1 {
    if let Some(v) = l.get(&case.0) {
      assert_eq!(v.value(), exp);
    }
  } else {
    l.insert(case.0.clone(), exp.clone());
  }
}

fn btree_round(l: &RwLock<BTreeMap<Vec<u8>, Vec<u8>>>, case: &(Vec<u8>, bool), exp: &Vec<u8>) {
  if case.1 {
    if let Some(v) = l.read().get(&case.0) {
      assert_eq!(v, exp);
    }
  } else {
    l.write().insert(case.0.clone(), exp.clone());
  }
}

fn random_key(rng: &mut SmallRng) -> Vec<u8> {
  let mut key = vec![0; 16];
  rng.fill(&mut key[..]);
  key
}

fn bench_read_write_skiplist_frac(b: &mut Bencher<'_>, frac: &usize) {
  let frac = *frac;
  let value = b"00123".to_vec();
  let list = Arc::new(SkipList::new());
  let l = list.clone();
  let stop = Arc::new(AtomicBool::new(false));
  let s = stop.clone();
  let v = value.clone();
  let j = thread::spawn(move || {
    let mut rng = SmallRng::seed_from_u64(1);
    while !s.load(Ordering::SeqCst) {
      let key = random_key(&mut rng);
      let case = (key, frac > rng.random_range(0..11));
      skiplist_round(&l, &case, &v);
    }
  });
  let mut rng = SmallRng::seed_from_u64(2);
  b.iter_batched_ref(
    || (random_key(&mut rng), frac > rng.random_range(0..11)),
    |case| skiplist_round(&list, case, &value),
    BatchSize::SmallInput,
  );
  stop.store(true, Ordering::SeqCst);
  j.join().unwrap();
}

fn bench_read_write_btree_frac(b: &mut Bencher<'_>, frac: &usize) {
  let frac = *frac;
  let value = b"00123".to_vec();
  let map = Arc::new(RwLock::new(BTreeMap::new()));
  let m = map.clone();
  let stop = Arc::new(AtomicBool::new(false));
  let s = stop.clone();
  let v = value.clone();
  let j = thread::spawn(move || {
    let mut rng = SmallRng::seed_from_u64(1);
    while !s.load(Ordering::SeqCst) {
      let key = random_key(&mut rng);
      let case = (key, frac > rng.random_range(0..11));
      btree_round(&m, &case, &v);
    }
  });
  let mut rng = SmallRng::seed_from_u64(2);
  b.iter_batched_ref(
    || (random_key(&mut rng), frac > rng.random_range(0..11)),
    |case| btree_round(&map, case, &value),
    BatchSize::SmallInput,
  );
  stop.store(true, Ordering::SeqCst);
  j.join().unwrap();
}

fn bench_read_write(c: &mut Criterion) {
  let mut group = c.benchmark_group("skiplist_read_write");
  for i in 0..=10 {
    group.bench_with_input(
      BenchmarkId::from_parameter(i),
      &i,
      bench_read_write_skiplist_frac,
    );
  }
  group.finish();

  let mut group = c.benchmark_group("btree_rwlock_read_write");
  for i in 0..=10 {
    group.bench_with_input(
      BenchmarkId::from_parameter(i),
      &i,
      bench_read_write_btree_frac,
    );
  }
  group.finish();
}

fn bench_write(c: &mut Criterion) {
  let list = SkipList::new();
  let value = b"00123".to_vec();
  let mut rng = SmallRng::seed_from_u64(3);
  c.bench_function("skiplist_write", |b| {
    b.iter_batched(
      || random_key(&mut rng),
      |key| {
        list.insert(key, value.clone());
      },
      BatchSize::SmallInput,
    )
  });

  let map = RwLock::new(BTreeMap::new());
  let mut rng = SmallRng::seed_from_u64(3);
  c.bench_function("btree_rwlock_write", |b| {
    b.iter_batched(
      || random_key(&mut rng),
      |key| {
        map.write().insert(key, value.clone());
      },
      BatchSize::SmallInput,
    )
  });
}

fn bench_get(c: &mut Criterion) {
  const N: u64 = 100_000;

  let list: SkipList<u64, u64> = (0..N).map(|i| (i, i)).collect();
  let map = RwLock::new((0..N).map(|i| (i, i)).collect::<BTreeMap<u64, u64>>());

  let mut group = c.benchmark_group("get_populated");
  group.bench_function("skiplist_ascending", |b| {
    let mut i = 0;
    b.iter(|| {
      assert_eq!(list.get_cloned(&i), Some(i));
      i = (i + 1) % N;
    })
  });
  group.bench_function("skiplist_descending", |b| {
    let mut i = N;
    b.iter(|| {
      i = if i == 0 { N - 1 } else { i - 1 };
      assert_eq!(list.get_cloned(&i), Some(i));
    })
  });
  group.bench_function("btree_rwlock_ascending", |b| {
    let mut i = 0;
    b.iter(|| {
      assert_eq!(map.read().get(&i).copied(), Some(i));
      i = (i + 1) % N;
    })
  });
  group.finish();
}

fn bench_descending_set(c: &mut Criterion) {
  const N: u64 = 10_000;

  let mut group = c.benchmark_group("descending_set");
  group.throughput(Throughput::Elements(N));
  group.bench_function("skiplist", |b| {
    b.iter_batched(
      SkipList::<u64, u64>::new,
      |list| {
        for i in (0..N).rev() {
          list.insert(i, i);
        }
        list
      },
      BatchSize::LargeInput,
    )
  });
  group.bench_function("btree_rwlock", |b| {
    b.iter_batched(
      || RwLock::new(BTreeMap::new()),
      |map| {
        for i in (0..N).rev() {
          map.write().insert(i, i);
        }
        map
      },
      BatchSize::LargeInput,
    )
  });
  group.finish();
}

fn bench_drain(c: &mut Criterion) {
  const N: u64 = 10_000;

  c.bench_function("skiplist_remove_front", |b| {
    b.iter_batched(
      || (0..N).map(|i| (i, i)).collect::<SkipList<u64, u64>>(),
      |list| {
        while let Some(ent) = list.remove_front() {
          black_box(ent);
        }
      },
      BatchSize::LargeInput,
    )
  });

  c.bench_function("btree_rwlock_pop_first", |b| {
    b.iter_batched(
      || RwLock::new((0..N).map(|i| (i, i)).collect::<BTreeMap<u64, u64>>()),
      |map| {
        while let Some(ent) = map.write().pop_first() {
          black_box(ent);
        }
      },
      BatchSize::LargeInput,
    )
  });
}

criterion_group!(
  benches,
  bench_write,
  bench_descending_set,
  bench_get,
  bench_read_write,
  bench_drain,
);
criterion_main!(benches);
