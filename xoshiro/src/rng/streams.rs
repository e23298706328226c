//! Stream partitioning for parallel use
//!
//! One seed, many generators: each stream starts a fixed jump distance after
//! the previous one, so no two streams share output until one of them has
//! drawn 2^128 (or 2^192) values. Hand each worker its own stream; streams
//! share nothing and need no coordination.

use serde::{Deserialize, Serialize};

use super::xoshiro::Xoshiro256StarStar;

/// Distance between consecutive streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// 2^128 steps apart (threads, tasks)
    #[default]
    Jump,
    /// 2^192 steps apart (nodes that each split further with `Jump`)
    LongJump,
}

/// Iterator over non-overlapping generators derived from one ancestor
///
/// # Example
/// ```
/// use xoshiro_core_rs::{Granularity, StreamSplitter, Xoshiro256StarStar};
///
/// let nodes: Vec<_> = StreamSplitter::new(Xoshiro256StarStar::new(7), Granularity::LongJump)
///     .take(3)
///     .collect();
/// assert_eq!(nodes.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct StreamSplitter {
    current: Xoshiro256StarStar,
    granularity: Granularity,
}

impl StreamSplitter {
    /// The first stream yielded is `root` itself.
    pub fn new(root: Xoshiro256StarStar, granularity: Granularity) -> Self {
        Self {
            current: root,
            granularity,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
}

impl Iterator for StreamSplitter {
    type Item = Xoshiro256StarStar;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.clone();
        match self.granularity {
            Granularity::Jump => self.current.jump(),
            Granularity::LongJump => self.current.long_jump(),
        }
        Some(out)
    }
}

/// `n` generators 2^128 steps apart, the first seeded directly from `seed`.
pub fn split_streams(seed: u64, n: usize) -> Vec<Xoshiro256StarStar> {
    StreamSplitter::new(Xoshiro256StarStar::new(seed), Granularity::Jump)
        .take(n)
        .collect()
}
