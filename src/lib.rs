#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod level;
mod node;

mod builder;
pub use builder::Builder;

mod error;
pub use error::Error;

mod key;
pub use key::{Filter, KeyOrder};

/// A map implementation based on skiplist
pub mod list;
pub use list::SkipList;

mod options;
pub use options::Options;

/// The default upper bound on the height of a node.
pub const DEFAULT_MAX_LEVEL: usize = 18;

/// The largest max level accepted by [`Builder`] and [`Options::validate`].
pub const MAX_LEVEL_LIMIT: usize = 64;

/// The default success probability of the geometric height distribution, the
/// inverse of Euler's number.
pub const DEFAULT_PROBABILITY: f64 = 1.0 / core::f64::consts::E;
