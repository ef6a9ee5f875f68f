use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::{Error, Options, SkipList};

/// The builder to build a [`SkipList`] from validated [`Options`].
///
/// ## Example
///
/// ```rust
/// use sklock::Builder;
///
/// let list = Builder::new()
///   .with_max_level(8)
///   .with_probability(0.5)
///   .with_seed(42)
///   .build::<u64, String>()
///   .unwrap();
///
/// list.set(1, "one".to_string());
/// assert_eq!(list.max_level(), 8);
/// assert_eq!(list.probability(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Builder {
  opts: Options,
}

impl Default for Builder {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  /// Create a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
    }
  }

  /// Returns a new builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::{Builder, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_max_level(4));
  /// assert_eq!(builder.options().max_level(), 4);
  /// ```
  #[inline]
  pub const fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Set the maximum level, the upper bound on the height of any node.
  ///
  /// Must be in `1..=`[`MAX_LEVEL_LIMIT`](crate::MAX_LEVEL_LIMIT). Default is `18`.
  #[inline]
  pub const fn with_max_level(mut self, max_level: usize) -> Self {
    self.opts = self.opts.with_max_level(max_level);
    self
  }

  /// Set the success probability of the geometric height distribution.
  ///
  /// Must be in `(0, 1)`. Default is `1 / e`.
  #[inline]
  pub const fn with_probability(mut self, probability: f64) -> Self {
    self.opts = self.opts.with_probability(probability);
    self
  }

  /// Seed the random source, so the shape of the list is reproducible.
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.opts = self.opts.with_seed(seed);
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Builds a [`SkipList`], seeding a [`SmallRng`] from the seed of the
  /// options, or from the operating system if there is none.
  ///
  /// # Errors
  ///
  /// - Returns `Error::InvalidMaxLevel` or `Error::InvalidProbability` if the
  ///   options are out of range, see [`Options::validate`].
  pub fn build<K, V>(self) -> Result<SkipList<K, V>, Error> {
    let rng = match self.opts.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_os_rng(),
    };
    self.build_with_rng(rng)
  }

  /// Builds a [`SkipList`] which draws node heights from `rng`.
  ///
  /// The seed of the options is ignored.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use rand::{rngs::SmallRng, SeedableRng};
  /// use sklock::Builder;
  ///
  /// let list = Builder::new()
  ///   .build_with_rng::<u32, u32, _>(SmallRng::seed_from_u64(7))
  ///   .unwrap();
  /// list.set(1, 1);
  /// assert_eq!(list.len(), 1);
  /// ```
  ///
  /// # Errors
  ///
  /// - Returns `Error::InvalidMaxLevel` or `Error::InvalidProbability` if the
  ///   options are out of range, see [`Options::validate`].
  pub fn build_with_rng<K, V, R: Rng>(self, rng: R) -> Result<SkipList<K, V, R>, Error> {
    self.opts.validate()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
      max_level = self.opts.max_level,
      probability = self.opts.probability,
      seeded = self.opts.seed.is_some(),
      "build skiplist"
    );

    Ok(SkipList::with_rng(rng, self.opts.max_level, self.opts.probability))
  }
}
