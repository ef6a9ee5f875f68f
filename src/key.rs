/// The ordering contract every key stored in a [`SkipList`](crate::SkipList) must satisfy.
///
/// The list never asks for raw equality: two keys are considered the same
/// key when neither [`greater`](KeyOrder::greater) nor [`less`](KeyOrder::less)
/// holds (see [`equivalent`](KeyOrder::equivalent)).
///
/// Every [`Ord`] type implements this trait through a blanket implementation.
/// Types that do not want (or cannot have) a total [`Ord`] implement the four
/// relations by hand.
///
/// ## Example
///
/// ```rust
/// use sklock::KeyOrder;
///
/// /// Orders readings by their rounded value only.
/// #[derive(Debug, Clone, Copy)]
/// struct Reading(f64);
///
/// impl KeyOrder for Reading {
///   fn greater(&self, other: &Self) -> bool {
///     self.0.round() > other.0.round()
///   }
///
///   fn greater_or_equal(&self, other: &Self) -> bool {
///     self.0.round() >= other.0.round()
///   }
///
///   fn less(&self, other: &Self) -> bool {
///     self.0.round() < other.0.round()
///   }
///
///   fn less_or_equal(&self, other: &Self) -> bool {
///     self.0.round() <= other.0.round()
///   }
/// }
///
/// assert!(Reading(1.2).equivalent(&Reading(0.9)));
/// assert!(Reading(2.0).greater(&Reading(0.9)));
/// ```
pub trait KeyOrder {
  /// Returns `true` if `self` is strictly greater than `other`.
  fn greater(&self, other: &Self) -> bool;

  /// Returns `true` if `self` is greater than or equal to `other`.
  fn greater_or_equal(&self, other: &Self) -> bool;

  /// Returns `true` if `self` is strictly less than `other`.
  fn less(&self, other: &Self) -> bool;

  /// Returns `true` if `self` is less than or equal to `other`.
  fn less_or_equal(&self, other: &Self) -> bool;

  /// Returns `true` if the two keys occupy the same position in the order.
  #[inline]
  fn equivalent(&self, other: &Self) -> bool {
    !self.greater(other) && !self.less(other)
  }
}

impl<T: Ord + ?Sized> KeyOrder for T {
  #[inline]
  fn greater(&self, other: &Self) -> bool {
    self > other
  }

  #[inline]
  fn greater_or_equal(&self, other: &Self) -> bool {
    self >= other
  }

  #[inline]
  fn less(&self, other: &Self) -> bool {
    self < other
  }

  #[inline]
  fn less_or_equal(&self, other: &Self) -> bool {
    self <= other
  }

  #[inline]
  fn equivalent(&self, other: &Self) -> bool {
    self == other
  }
}

/// A stable identity projection of a key, used by
/// [`SkipList::remove_by_filter`](crate::SkipList::remove_by_filter).
///
/// The fingerprint is compared instead of the ordering relations, so two keys
/// that collapse to the same position under [`KeyOrder`] can still be told
/// apart when removing.
///
/// ## Example
///
/// ```rust
/// use sklock::{Filter, KeyOrder, SkipList};
///
/// #[derive(Debug, Clone)]
/// struct Job {
///   priority: u8,
///   name: &'static str,
/// }
///
/// impl KeyOrder for Job {
///   fn greater(&self, other: &Self) -> bool { self.priority > other.priority }
///   fn greater_or_equal(&self, other: &Self) -> bool { self.priority >= other.priority }
///   fn less(&self, other: &Self) -> bool { self.priority < other.priority }
///   fn less_or_equal(&self, other: &Self) -> bool { self.priority <= other.priority }
/// }
///
/// impl Filter for Job {
///   type Fingerprint = &'static str;
///
///   fn fingerprint(&self) -> &'static str {
///     self.name
///   }
/// }
///
/// let list = SkipList::new();
/// list.set(Job { priority: 1, name: "compact" }, ());
///
/// // Same priority, different job: not removed.
/// assert!(list.remove_by_filter(&Job { priority: 1, name: "flush" }).is_none());
/// assert!(list.remove_by_filter(&Job { priority: 1, name: "compact" }).is_some());
/// ```
pub trait Filter {
  /// The comparable identity of a key.
  type Fingerprint: PartialEq;

  /// Returns the identity of this key.
  fn fingerprint(&self) -> Self::Fingerprint;
}

macro_rules! impl_filter_for_copy {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Filter for $ty {
        type Fingerprint = $ty;

        #[inline]
        fn fingerprint(&self) -> $ty {
          *self
        }
      }
    )*
  };
}

impl_filter_for_copy!(
  u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool,
);

impl Filter for std::string::String {
  type Fingerprint = std::string::String;

  #[inline]
  fn fingerprint(&self) -> Self::Fingerprint {
    self.clone()
  }
}

impl Filter for &str {
  type Fingerprint = std::string::String;

  #[inline]
  fn fingerprint(&self) -> Self::Fingerprint {
    (*self).to_owned()
  }
}

impl Filter for std::vec::Vec<u8> {
  type Fingerprint = std::vec::Vec<u8>;

  #[inline]
  fn fingerprint(&self) -> Self::Fingerprint {
    self.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, Copy)]
  struct Bucket(u32);

  impl KeyOrder for Bucket {
    fn greater(&self, other: &Self) -> bool {
      self.0 / 10 > other.0 / 10
    }

    fn greater_or_equal(&self, other: &Self) -> bool {
      self.0 / 10 >= other.0 / 10
    }

    fn less(&self, other: &Self) -> bool {
      (self.0 / 10) < (other.0 / 10)
    }

    fn less_or_equal(&self, other: &Self) -> bool {
      self.0 / 10 <= other.0 / 10
    }
  }

  #[test]
  fn blanket_ord_relations() {
    assert!(5u32.greater(&3));
    assert!(5u32.greater_or_equal(&5));
    assert!(3u32.less(&5));
    assert!(5u32.less_or_equal(&5));
    assert!(5u32.equivalent(&5));
    assert!(!5u32.equivalent(&6));
    assert!("b".less(&"c"));
  }

  #[test]
  fn derived_equivalence() {
    assert!(Bucket(11).equivalent(&Bucket(19)));
    assert!(!Bucket(11).equivalent(&Bucket(21)));
    assert!(Bucket(21).greater(&Bucket(19)));
  }

  #[test]
  fn fingerprints() {
    assert_eq!(7u64.fingerprint(), 7);
    assert_eq!("key".fingerprint(), "key".to_string());
    assert_eq!(b"ab".to_vec().fingerprint(), b"ab".to_vec());
  }
}
