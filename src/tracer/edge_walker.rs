//! Edge-walker: walks a boundary with the filled region on its left
//! (spec.md §4.3). Filled mode only; invoked by the curve driver whenever a
//! zone-crosser hands off at a boundary (level class 2).

use super::{Outcome, Pass, TraceCtx};
use crate::constants::*;
use crate::site::Site;
use crate::types::{PointKind, RawPoint};

/// Walk the boundary starting from `site`'s current edge until the filled
/// region stops touching it (handed back to the zone-crosser) or the curve
/// closes / hands off to the slit-cutter.
pub fn run(ctx: &mut TraceCtx, site: &mut Site, pass: &mut Pass) -> Outcome {
  let imax = ctx.mesh.imax;

  loop {
    let left = site.left;
    let p0 = point0(site.edge, left);
    let p1 = point1(site.edge, left, imax);
    let class_p0 = ctx.class(p0);

    if class_p0 == 1 {
      if let Pass::Emit(out) = pass {
        out.push(RawPoint { point: ctx.mesh.point_at(p0), kind: PointKind::EdgeCorner, start_of_slit: false });
      }
    } else if site.n == 0 {
      // The curve started here on a non-between boundary point: emit the
      // same interpolated cut the zone-crosser would emit, so the point the
      // curve later re-closes on is bitwise identical (spec.md §4.3 step 2).
      if let Pass::Emit(out) = pass {
        let level = if class_p0 == 0 { 0 } else { 2 };
        let (z_a, z_b) = (ctx.mesh.z[p0], ctx.mesh.z[p1]);
        debug_assert!(z_a != z_b, "boundary cut must have unequal endpoint values");
        let t = (ctx.zlevel(level) - z_a) / (z_b - z_a);
        let point = ctx.mesh.point_at(p0).lerp(ctx.mesh.point_at(p1), t);
        out.push(RawPoint { point, kind: PointKind::EdgeCut2, start_of_slit: false });
      }
    }

    let not_first = site.n > 0;
    if not_first && site.edge == site.edge0 && left == site.left0 {
      let on_boundary = ctx.grid.test(p0, if is_jedge(left, imax) { J_BNDY } else { I_BNDY });
      // A hole's boundary closes back on itself without ever leaving the
      // filled region by a true mesh/chunk boundary: that closure is a seam
      // that must be spliced to the enclosing curve by a slit.
      let hole_close = left < 0 && (!on_boundary || site.level0 != 0);
      if matches!(pass, Pass::Topology) {
        ctx.grid.clear_bits(p0, start_mark(left, imax));
        ctx.count -= 1;
      }
      return if hole_close { Outcome::SlitDown } else { Outcome::Closed };
    }

    if pass.is_emit() && !is_jedge(left, imax) && left < 0 && ctx.grid.test(p0, SLIT_DN) {
      if ctx.grid.test(p0, SLIT_DN_VISITED) {
        return Outcome::SlitDown;
      }
      ctx.grid.set_bits(p0, SLIT_DN_VISITED);
    }

    if matches!(pass, Pass::Topology) && not_first {
      ctx.grid.clear_bits(p0, start_mark(left, imax));
      ctx.count -= 1;
    }
    site.n += 1;

    // The point this edge is heading towards: point1 when walking forward
    // (left > 0), point0 when walking backward (left < 0) — `site.edge`
    // itself is always the point currently stood on, regardless of sign.
    let dest = if left > 0 { p1 } else { p0 };
    let class_dest = ctx.class(dest);
    if class_dest != 1 {
      return Outcome::ToLevel(if class_dest == 2 { 2 } else { 0 });
    }

    if let Some(outcome) = advance(ctx, site, pass, dest, left, imax) {
      return outcome;
    }
  }
}

/// Move from `dest` onto the next boundary edge, preferring the tightest
/// turn that keeps the filled zone on the left: hug the corner first (turn
/// towards the interior), else go straight, else swing wide around a
/// concave corner (spec.md §4.3 step 7).
fn advance(ctx: &mut TraceCtx, site: &mut Site, pass: &Pass, dest: usize, left: Left, imax: usize) -> Option<Outcome> {
  let turn_in = rotate_ccw(left, imax);
  let turn_out = rotate_cw(left, imax);

  for dir in [turn_in, left, turn_out] {
    let anchor = point0(dest, dir);
    let is_j = is_jedge(dir, imax);

    if pass.is_emit() && !is_j && dir > 0 && ctx.grid.test(anchor, SLIT_UP) {
      site.edge = dest;
      site.left = dir;
      return Some(Outcome::SlitUp);
    }

    let boundary_bit = if is_j { J_BNDY } else { I_BNDY };
    if ctx.grid.test(anchor, boundary_bit) {
      site.edge = dest;
      site.left = dir;
      return None;
    }
  }

  unreachable!("edge-walker: point {dest} has no boundary edge to continue on");
}

#[cfg(test)]
#[path = "edge_walker_test.rs"]
mod edge_walker_test;
