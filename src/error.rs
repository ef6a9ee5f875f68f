/// Error type for the validated configuration path of the [`SkipList`](crate::SkipList).
///
/// The plain constructors never return it; see [`Builder::build`](crate::Builder::build),
/// [`Options::validate`](crate::Options::validate) and
/// [`SkipList::try_set_probability`](crate::SkipList::try_set_probability).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Indicates that the maximum level is zero or larger than [`MAX_LEVEL_LIMIT`](crate::MAX_LEVEL_LIMIT).
  InvalidMaxLevel(usize),

  /// Indicates that the success probability is not in the open interval `(0, 1)`.
  InvalidProbability(f64),
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::InvalidMaxLevel(level) => write!(
        f,
        "max level {level} is out of range, expected 1..={}",
        crate::MAX_LEVEL_LIMIT
      ),
      Self::InvalidProbability(p) => {
        write!(f, "probability {p} is out of range, expected a value in (0, 1)")
      }
    }
  }
}

impl std::error::Error for Error {}
