use super::{Error, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY, MAX_LEVEL_LIMIT};

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
  max_level: usize,
  probability: f64,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_level: DEFAULT_MAX_LEVEL,
      probability: DEFAULT_PROBABILITY,
      seed: None,
    }
  }

  /// Sets the maximum level, the upper bound on the height of any node.
  ///
  /// The default maximum level is `18`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::Options;
  ///
  /// let opts = Options::new().with_max_level(4);
  /// assert_eq!(opts.max_level(), 4);
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: usize) -> Self {
    self.max_level = max_level;
    self
  }

  /// Sets the success probability of the geometric height distribution.
  ///
  /// Higher values produce taller towers. The default is `1 / e`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::Options;
  ///
  /// let opts = Options::new().with_probability(0.25);
  /// assert_eq!(opts.probability(), 0.25);
  /// ```
  #[inline]
  pub const fn with_probability(mut self, probability: f64) -> Self {
    self.probability = probability;
    self
  }

  /// Seeds the random source, making the shape of the list reproducible.
  ///
  /// By default the random source is seeded from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklock::Options;
  ///
  /// let opts = Options::new().with_seed(42);
  /// assert_eq!(opts.seed(), Some(42));
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Returns the maximum level.
  #[inline]
  pub const fn max_level(&self) -> usize {
    self.max_level
  }

  /// Returns the success probability.
  #[inline]
  pub const fn probability(&self) -> f64 {
    self.probability
  }

  /// Returns the seed of the random source, if any.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }

  /// Checks the options.
  ///
  /// # Errors
  ///
  /// - Returns `Error::InvalidMaxLevel` if the maximum level is `0` or larger than [`MAX_LEVEL_LIMIT`].
  /// - Returns `Error::InvalidProbability` if the probability is not in `(0, 1)`.
  pub fn validate(&self) -> Result<(), Error> {
    if self.max_level == 0 || self.max_level > MAX_LEVEL_LIMIT {
      return Err(Error::InvalidMaxLevel(self.max_level));
    }

    validate_probability(self.probability)
  }
}

#[inline]
pub(crate) fn validate_probability(probability: f64) -> Result<(), Error> {
  if probability > 0.0 && probability < 1.0 {
    Ok(())
  } else {
    Err(Error::InvalidProbability(probability))
  }
}
