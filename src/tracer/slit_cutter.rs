//! Slit-cutter: splices an inner closed curve to its enclosing outer curve by
//! a zero-width cut, down then (pass 2 only) back up (spec.md §4.4).

use super::{Outcome, Pass, TraceCtx};
use crate::constants::*;
use crate::site::Site;
use crate::types::{PointKind, RawPoint};

/// Walk from `site.edge` in the `-imax` direction until the column leaves the
/// "between" class or hits a boundary, marking the slit's two ends so a
/// later boundary walk can find it from either side.
pub fn run_down(ctx: &mut TraceCtx, site: &mut Site, pass: &mut Pass) -> Outcome {
  let imax = ctx.mesh.imax;
  let down = -(imax as Left);
  let mut p = site.edge;

  if matches!(pass, Pass::Topology) {
    ctx.grid.set_bits(p, SLIT_DN);
  }

  let mut first = true;
  loop {
    if let Pass::Emit(out) = pass {
      out.push(RawPoint { point: ctx.mesh.point_at(p), kind: PointKind::SlitDown, start_of_slit: first });
    } else {
      site.n += 2;
    }
    first = false;

    let hit_boundary = ctx.grid.test(p, J_BNDY);
    let next = p - imax;
    let class_next = ctx.class(next);

    if hit_boundary || class_next != 1 {
      return match pass {
        Pass::Topology => {
          ctx.grid.set_bits(p, SLIT_UP);
          site.n += 1;
          Outcome::OpenEnd
        }
        Pass::Emit(_) => {
          site.edge = next;
          site.left = down;
          if hit_boundary {
            Outcome::ToLevel(2)
          } else {
            Outcome::ToLevel(if class_next == 2 { 2 } else { 0 })
          }
        }
      };
    }
    p = next;
  }
}

/// Pass 2 only: walk from `site.edge` in the `+imax` direction back out to
/// the enclosing curve, emitting the same column a second time.
pub fn run_up(ctx: &mut TraceCtx, site: &mut Site, pass: &mut Pass) -> Outcome {
  debug_assert!(pass.is_emit(), "slit-cutter up-stroke only runs on pass 2");
  let imax = ctx.mesh.imax;
  let up = imax as Left;
  let mut p = site.edge;

  let mut first = true;
  loop {
    if let Pass::Emit(out) = pass {
      out.push(RawPoint { point: ctx.mesh.point_at(p), kind: PointKind::SlitUp, start_of_slit: first });
    }
    first = false;

    let hit_boundary = ctx.grid.test(p, J_BNDY);
    let next = p + imax;
    let class_next = ctx.class(next);

    if hit_boundary || class_next != 1 {
      site.edge = next;
      site.left = -up;
      return if hit_boundary {
        Outcome::ToLevel(2)
      } else {
        Outcome::ToLevel(if class_next == 2 { 2 } else { 0 })
      };
    }
    p = next;
  }
}

#[cfg(test)]
#[path = "slit_cutter_test.rs"]
mod slit_cutter_test;
