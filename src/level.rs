use rand::Rng;

/// Precompute the level thresholds so that only a single random number
/// needs to be generated per node: `table[i] = p^(i + 1)`.
pub(crate) fn probability_table(probability: f64, max_level: usize) -> Box<[f64]> {
  let mut table = Vec::with_capacity(max_level);
  let mut p = probability;
  for _ in 0..max_level {
    table.push(p);
    p *= probability;
  }
  table.into_boxed_slice()
}

/// Geometric height generator for new nodes.
#[derive(Debug)]
pub(crate) struct LevelGenerator<R> {
  rng: R,
  max_level: usize,
  probability: f64,
  table: Box<[f64]>,
}

impl<R> LevelGenerator<R> {
  pub(crate) fn new(rng: R, max_level: usize, probability: f64) -> Self {
    Self {
      rng,
      max_level,
      probability,
      table: probability_table(probability, max_level),
    }
  }

  #[inline]
  pub(crate) const fn probability(&self) -> f64 {
    self.probability
  }

  /// Replaces the success probability. Heights handed out before the call are
  /// not affected.
  pub(crate) fn set_probability(&mut self, probability: f64) {
    self.probability = probability;
    self.table = probability_table(probability, self.max_level);
  }
}

impl<R: Rng> LevelGenerator<R> {
  /// Returns a height in `[1, max_level]`.
  pub(crate) fn random_level(&mut self) -> usize {
    let rnd: f64 = self.rng.random();
    let mut h = 1;

    while h < self.max_level && rnd < self.table[h - 1] {
      h += 1;
    }
    h
  }
}
