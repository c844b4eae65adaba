//! Zone-crosser: steps across a zone from one cut edge to the next
//! (spec.md §4.2).

use super::{Outcome, Pass, TraceCtx};
use crate::constants::*;
use crate::types::{PointKind, RawPoint};

/// Cross zones starting from `site`'s current cut edge until a termination
/// or hand-off condition is reached. `level` is the class (0 or 1) of the
/// level this curve is tracing around; line mode always passes 0.
pub fn run(ctx: &mut TraceCtx, site: &mut crate::site::Site, level: u16, pass: &mut Pass) -> Outcome {
  let imax = ctx.mesh.imax;

  loop {
    let left = site.left;
    let p0 = point0(site.edge, left);
    let p1 = point1(site.edge, left, imax);

    if let Pass::Emit(out) = pass {
      let zlevel = ctx.zlevel(level);
      let z_p0 = ctx.mesh.z[p0];
      let z_p1 = ctx.mesh.z[p1];
      debug_assert!(z_p1 != z_p0, "cut edge must have unequal endpoint values");
      let t = (zlevel - z_p0) / (z_p1 - z_p0);
      let point = ctx.mesh.point_at(p0).lerp(ctx.mesh.point_at(p1), t);
      out.push(RawPoint { point, kind: PointKind::ChunkZone, start_of_slit: false });
    }

    let not_first = site.n > 0;
    let is_i_edge = !is_jedge(left, imax);

    if not_first && is_i_edge {
      if !ctx.two_levels && ctx.grid.test(p0, OPEN_END) {
        return Outcome::OpenEnd;
      }
      if site.edge == site.edge0 && left == site.left0 {
        if matches!(pass, Pass::Topology) {
          erase_start(ctx, p0, left);
        }
        return if ctx.two_levels && left < 0 { Outcome::SlitDown } else { Outcome::Closed };
      }
      if matches!(pass, Pass::Topology) {
        erase_start(ctx, p0, left);
      }
    }
    site.n += 1;

    // The zone's other two corners, across the zone from p0/p1.
    let step = cross_step(left, imax);
    let q0 = (p0 as isize + step) as usize;
    let q1 = (p1 as isize + step) as usize;

    let above_p0 = above(ctx, level, p0);
    let above_p1 = above(ctx, level, p1);
    let above_q0 = above(ctx, level, q0);
    let above_q1 = above(ctx, level, q1);
    let diag_a = above_p0 == above_q1;
    let diag_b = above_p1 == above_q0;

    let turn_right = if diag_a && !diag_b {
      above_p0
    } else if diag_b && !diag_a {
      !above_p1
    } else if diag_a && diag_b {
      let anchor = p0.min(p1).min(q0).min(q1);
      let zone_i = anchor % imax;
      let zone_j = anchor / imax;
      let mean = ctx.corner_mean(zone_i, zone_j);
      let word = ctx.saddle.resolve(zone_i, zone_j, || mean, ctx.z0, ctx.z1);
      let gt = if level == 0 { word & SADDLE_GT0 != 0 } else { word & SADDLE_GT1 != 0 };
      gt ^ above_p0
    } else {
      // Neither diagonal agrees: step straight across to the parallel edge
      // on the zone's far side, now entering the neighbouring zone.
      site.edge = (site.edge as isize + left + step) as usize;
      site.left = -left;
      continue;
    };

    // Pivot at p1 (turn right) or p0 (turn left) onto the zone's other,
    // perpendicular cut edge.
    site.edge = if turn_right { p1 } else { p0 };
    site.left = step;
    let new_anchor = point0(site.edge, site.left);

    // Slit arrival check (pass 2 only).
    if pass.is_emit() && !is_jedge(site.left, imax) {
      if site.left > 0 && ctx.grid.test(new_anchor, SLIT_UP) {
        return Outcome::SlitUp;
      }
      if site.left < 0 && ctx.grid.test(new_anchor, SLIT_DN) {
        return Outcome::SlitDown;
      }
    }

    let boundary_bit = if is_jedge(site.left, imax) { J_BNDY } else { I_BNDY };
    if ctx.grid.test(new_anchor, boundary_bit) {
      if matches!(pass, Pass::Topology) {
        ctx.grid.clear_bits(new_anchor, start_mark(site.left, imax));
        ctx.count -= 1;
      }
      site.left = -site.left;
      return if ctx.two_levels { Outcome::Boundary } else { Outcome::OpenEnd };
    }
  }
}

#[inline]
fn above(ctx: &TraceCtx, level: u16, ij: usize) -> bool {
  ctx.class(ij) as i32 > level as i32
}

/// Clear the start mark at the physical anchor of the cut edge just crossed
/// (not necessarily `site.edge`, which may name either endpoint depending on
/// the sign of `left`).
fn erase_start(ctx: &mut TraceCtx, anchor: usize, left: Left) {
  let imax = ctx.mesh.imax;
  ctx.grid.clear_bits(anchor, start_mark(left, imax));
  ctx.count -= 1;
  if !ctx.two_levels {
    ctx.grid.clear_bits(anchor, start_mark(-left, imax));
  }
}

#[cfg(test)]
#[path = "zone_crosser_test.rs"]
mod zone_crosser_test;
