//! Start-point enumeration and the outer two-pass loop (spec.md §4.5).
//!
//! `tracer::drive_curve` traces one curve once it has a `(edge0, left0)` to
//! start from; this module finds that starting point, runs both passes to
//! completion, and hands pass 2's flat point stream to `reorder`.

use crate::constants::*;
use crate::site::Site;
use crate::tracer::{drive_curve, Outcome, Pass, TraceCtx};
use crate::types::RawPoint;

/// Scans the state grid for start markers in the order the initializer laid
/// them down. The `START_ROW` bit is still threaded through for bit-layout
/// fidelity, but the scan position itself is tracked directly (permitted by
/// spec.md §9: "implementers may instead maintain an auxiliary list of start
/// positions; the observable output is unchanged").
pub struct StartCursor {
  next_ij: usize,
}

impl StartCursor {
  pub fn new() -> Self {
    Self { next_ij: 0 }
  }

  /// Find the next `(edge0, left0)` to start a curve from, given the
  /// previous curve's start site (if any). Checks the same-edge special
  /// cases first, then falls back to a forward scan.
  fn find(&mut self, ctx: &TraceCtx, prev: Option<&Site>) -> Option<(usize, Left)> {
    let imax = ctx.mesh.imax as Left;

    if let Some(prev) = prev {
      let mask = match prev.left0 {
        1 => I0_START | J1_START | J0_START,
        -1 => J1_START | J0_START,
        l if l == imax => J0_START,
        _ => 0,
      };
      if mask != 0 {
        let bits = ctx.grid.get(prev.edge0) & mask;
        if bits != 0 {
          return Some((prev.edge0, pick_direction(bits, imax)));
        }
      }
    }

    let total = ctx.grid.len();
    while self.next_ij < total {
      let ij = self.next_ij;
      let bits = ctx.grid.get(ij) & ANY_START;
      if bits != 0 {
        return Some((ij, pick_direction(bits, imax)));
      }
      self.next_ij += 1;
    }
    None
  }
}

/// Priority order from spec.md §4.5: `I1_START`, `I0_START`, `J1_START`,
/// `J0_START`.
fn pick_direction(bits: u16, imax: Left) -> Left {
  if bits & I1_START != 0 {
    1
  } else if bits & I0_START != 0 {
    -1
  } else if bits & J1_START != 0 {
    imax
  } else {
    -imax
  }
}

/// `level0` for a freshly-found start. Line mode has no upper level to walk
/// a boundary at, so it always starts at `0`. Filled mode starts at `2` for
/// j-edge starts and boundary i-edge starts (so the driver hands off to the
/// edge-walker immediately); otherwise at the non-"between" endpoint class.
fn start_level(ctx: &TraceCtx, edge0: usize, left0: Left) -> u16 {
  if !ctx.two_levels {
    return 0;
  }
  let imax = ctx.mesh.imax;
  if is_jedge(left0, imax) {
    return 2;
  }
  if ctx.grid.test(edge0, I_BNDY) {
    return 2;
  }
  let p0 = point0(edge0, left0);
  let p1 = point1(edge0, left0, imax);
  let c0 = ctx.class(p0);
  if c0 != 1 {
    c0
  } else {
    ctx.class(p1)
  }
}

/// One curve's topology-pass result, as recorded for pass 2 and reorder.
#[derive(Clone, Copy, Debug)]
pub struct PartSize {
  pub edge0: usize,
  pub left0: Left,
  /// Signed point count: negative when pass 2 will need to merge this curve
  /// with a slit/open-end partner (spec.md §9, "two-pass sizing").
  pub n: i64,
}

/// Pass 1: discover every curve's topology, returning one signed size per
/// curve. Mutates `ctx.grid`/`ctx.saddle`/`ctx.count` in place.
pub fn run_pass1(ctx: &mut TraceCtx) -> Vec<PartSize> {
  let mut cursor = StartCursor::new();
  let mut prev: Option<Site> = None;
  let mut sizes = Vec::new();
  let mut first_call = true;

  while let Some((edge0, left0)) = cursor.find(ctx, prev.as_ref()) {
    if first_call {
      ctx.grid.clear_bits(0, START_ROW);
      first_call = false;
    }

    let level0 = start_level(ctx, edge0, left0);
    let mut pass = Pass::Topology;
    let result = drive_curve(ctx, edge0, left0, level0, &mut pass);
    ctx.count -= 1;

    let open = matches!(result.outcome, Outcome::OpenEnd);
    if open {
      ctx.grid.set_bits(edge0, OPEN_END);
      ctx.grid.clear_bits(edge0, start_mark(left0, ctx.mesh.imax));
    }

    sizes.push(PartSize { edge0, left0, n: if open { -result.n } else { result.n } });

    let mut site = Site::new(edge0, left0);
    site.n = result.n;
    prev = Some(site);

    if ctx.count <= 0 {
      break;
    }
  }

  sizes
}

/// One pass-2 curve's worth of output: a contiguous run of `points` plus the
/// same `(edge0, left0)` pass 1 recorded it under, so reorder can match
/// `np[i]` against what was actually emitted.
pub struct EmittedPart {
  pub points: Vec<RawPoint>,
}

/// Pass 2: retrace every curve pass 1 found, in the same order, emitting
/// coordinates this time. Stops after exactly `sizes.len()` curves — pass
/// 1's invariant (the sum of signed sizes accounts for every start marker)
/// guarantees this matches the `ALL_DONE` sentinel pass 1 would otherwise be
/// scanned for.
pub fn run_pass2(ctx: &mut TraceCtx, sizes: &[PartSize]) -> Vec<EmittedPart> {
  let mut parts = Vec::with_capacity(sizes.len());

  for size in sizes {
    let mut out = Vec::new();
    let mut pass = Pass::Emit(&mut out);
    let level0 = start_level(ctx, size.edge0, size.left0);
    let _ = drive_curve(ctx, size.edge0, size.left0, level0, &mut pass);
    parts.push(EmittedPart { points: out });
  }

  parts
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;
