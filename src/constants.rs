//! Bit layout for the per-point state word and the edge-direction encoding.
//!
//! # State word layout
//!
//! One `u16` per mesh point. The initializer and the three traversers all
//! read and write these bits directly, so the layout is load-bearing: it is
//! not an implementation detail that can be swapped for an enum.
//!
//! ```text
//! 15   14   13   12   11   10    9    8    7    6    5    4    3    2  1 0
//! ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬──┬─┬─┐
//! │ SDV│ALLD│OPEN│SLDN│SLUP│SROW│J1ST│J0ST│I1ST│I0ST│JBND│IBND│ZONE│ZVALUE │
//! └────┴────┴────┴────┴────┴────┴────┴────┴────┴────┴────┴────┴────┴──┴─┴─┘
//! ```
//!
//! (`SDV` = `SLIT_DN_VISITED`, `ALLD` = `ALL_DONE`, `OPEN` = `OPEN_END`,
//! `SLDN`/`SLUP` = `SLIT_DN`/`SLIT_UP`, `SROW` = `START_ROW`.)
//!
//! # Direction encoding
//!
//! A directed edge is named by `(edge, left)`: `edge` is the point index at
//! the edge's anchor, `left` is one of `{+1, -1, +imax, -imax}`.
//! `|left|` selects the edge kind (`1` = i-edge, `imax` = j-edge); `sign(left)`
//! selects which side of the edge the interior lies on. While tracing a
//! curve the filled/interior region is always on the left of the directed
//! edge (spec invariant 2).

/// Low 2 bits: point classification relative to the one or two active levels.
/// `0` = below z0, `1` = between z0 and z1, `2` = above z1 (filled mode only).
pub const Z_VALUE: u16 = 0x0003;

/// Zone anchored at this point exists (is traceable).
pub const ZONE_EX: u16 = 0x0004;

/// The i-edge (`|left| == 1`) leaving this point is a mesh or chunk boundary.
pub const I_BNDY: u16 = 0x0008;

/// The j-edge (`|left| == imax`) leaving this point is a mesh or chunk boundary.
pub const J_BNDY: u16 = 0x0010;

/// Potential start on the i-edge leaving this point, zone to the left (-1).
pub const I0_START: u16 = 0x0020;

/// Potential start on the i-edge leaving this point, zone to the right (+1).
pub const I1_START: u16 = 0x0040;

/// Potential start on the j-edge leaving this point, zone below (-imax).
pub const J0_START: u16 = 0x0080;

/// Potential start on the j-edge leaving this point, zone above (+imax).
pub const J1_START: u16 = 0x0100;

/// Acceleration hint: this row is (or chains to) the next unexamined start row.
pub const START_ROW: u16 = 0x0200;

/// The i-edge leaving this point is the top of a slit.
pub const SLIT_UP: u16 = 0x0400;

/// The i-edge leaving this point is the bottom of a slit.
pub const SLIT_DN: u16 = 0x0800;

/// Line-mode only: this start is the boundary end of an open curve.
pub const OPEN_END: u16 = 0x1000;

/// Sentinel on the final start point; terminates pass 2.
pub const ALL_DONE: u16 = 0x2000;

/// Pass-2 bookkeeping: this slit down-stroke has already been visited once.
pub const SLIT_DN_VISITED: u16 = 0x4000;

/// All four "potential start" bits, as a convenience mask.
pub const ANY_START: u16 = I0_START | I1_START | J0_START | J1_START;

/// Saddle cache bit: this zone's saddle ambiguity has been resolved and cached.
pub const SADDLE_SET: u8 = 0x01;

/// Saddle cache bit: the zone centre value is greater than `z0`.
pub const SADDLE_GT0: u8 = 0x02;

/// Saddle cache bit: the zone centre value is greater than `z1`.
pub const SADDLE_GT1: u8 = 0x04;

/// Direction taken when crossing a zone or walking a boundary.
///
/// `magnitude` selects edge kind (`1` => i-edge, `imax` => j-edge);
/// `sign` selects which side of the edge is interior.
pub type Left = isize;

/// Step from the edge's first endpoint (`point0`) to the edge's second
/// endpoint (`point1`): always the positive unit step along the edge's axis.
#[inline(always)]
pub fn forward(left: Left, imax: usize) -> isize {
  if left == 1 || left == imax as isize {
    left
  } else {
    -left
  }
}

/// First endpoint of the directed edge named by `(edge, left)`.
#[inline(always)]
pub fn point0(edge: usize, left: Left) -> usize {
  if left > 0 {
    edge
  } else {
    (edge as isize + left) as usize
  }
}

/// Second endpoint of the directed edge named by `(edge, left)`.
#[inline(always)]
pub fn point1(edge: usize, left: Left, imax: usize) -> usize {
  let fwd = forward(left, imax);
  (point0(edge, left) as isize + fwd) as usize
}

/// True when `left` names a j-edge (`|left| == imax`) rather than an i-edge.
#[inline(always)]
pub fn is_jedge(left: Left, imax: usize) -> bool {
  left.unsigned_abs() == imax
}

/// The "potential start" bit corresponding to a given `left` direction.
#[inline(always)]
pub fn start_mark(left: Left, imax: usize) -> u16 {
  match (is_jedge(left, imax), left > 0) {
    (false, true) => I1_START,
    (false, false) => I0_START,
    (true, true) => J1_START,
    (true, false) => J0_START,
  }
}

/// Step from a point on the edge to the corresponding point on the zone's
/// opposite edge: perpendicular to `forward` (the edge's own axis), with
/// `sign(left)` choosing which of the two adjacent zones is interior.
#[inline(always)]
pub fn cross_step(left: Left, imax: usize) -> isize {
  let perp = if is_jedge(left, imax) { 1 } else { imax as isize };
  if left > 0 {
    perp
  } else {
    -perp
  }
}

/// Rotate a travel direction 90 degrees counter-clockwise: `+1 -> +imax ->
/// -1 -> -imax -> +1`. Used by the edge-walker to hug a convex boundary
/// corner (spec.md §4.3, "prefer a left turn").
#[inline(always)]
pub fn rotate_ccw(left: Left, imax: usize) -> Left {
  let imax = imax as isize;
  if left == 1 {
    imax
  } else if left == imax {
    -1
  } else if left == -1 {
    -imax
  } else {
    1
  }
}

/// Inverse of [`rotate_ccw`]: rotate a travel direction 90 degrees
/// clockwise, swinging wide around a concave boundary corner.
#[inline(always)]
pub fn rotate_cw(left: Left, imax: usize) -> Left {
  let imax = imax as isize;
  if left == 1 {
    -imax
  } else if left == -imax {
    -1
  } else if left == -1 {
    imax
  } else {
    1
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
