//! The mutable traversal cursor shared by the three traversers (spec.md §3).

use crate::constants::Left;

/// Current position and direction of a single curve traversal, plus enough
/// bookkeeping to detect closure and to resume after a traverser hands off
/// to another one mid-curve.
#[derive(Clone, Copy, Debug)]
pub struct Site {
  /// Point index naming the directed edge's anchor.
  pub edge: usize,
  /// One of `{+1, -1, +imax, -imax}`.
  pub left: Left,
  /// Output points emitted so far on the current curve.
  pub n: i64,
  /// Where the current curve started, for closure detection.
  pub edge0: usize,
  pub left0: Left,
  /// Anchor of the very first curve traced this pass, for the `START_ROW` chain.
  pub edge00: usize,
  /// The level class (0 or 2) the current curve started on.
  pub level0: u16,
}

impl Site {
  pub fn new(edge: usize, left: Left) -> Self {
    Self { edge, left, n: 0, edge0: edge, left0: left, edge00: edge, level0: 0 }
  }

  #[inline]
  pub fn at_start(&self) -> bool {
    self.edge == self.edge0 && self.left == self.left0
  }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;
