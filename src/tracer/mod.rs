//! The three cooperating traversers plus the curve driver that alternates
//! them until a curve closes (spec.md §4.2-§4.5).

pub mod edge_walker;
pub mod slit_cutter;
pub mod zone_crosser;

use crate::constants::*;
use crate::mesh::Mesh;
use crate::site::Site;
use crate::state::{SaddleCache, StateGrid};
use crate::types::RawPoint;

/// Which pass a traverser is executing. Pass 1 only mutates `grid`/`saddle`
/// and counts; pass 2 additionally emits points into `out`.
pub enum Pass<'p> {
  Topology,
  Emit(&'p mut Vec<RawPoint>),
}

impl<'p> Pass<'p> {
  #[inline]
  pub fn is_emit(&self) -> bool {
    matches!(self, Pass::Emit(_))
  }
}

/// Shared, borrowed state every traverser operates on.
pub struct TraceCtx<'a> {
  pub mesh: &'a Mesh,
  pub grid: &'a mut StateGrid,
  pub saddle: &'a mut SaddleCache,
  pub z0: f64,
  pub z1: f64,
  pub two_levels: bool,
  /// Remaining candidate start markers (pass 1 only; spec.md §3 `Site::count`).
  pub count: i64,
}

impl<'a> TraceCtx<'a> {
  #[inline]
  pub fn class(&self, ij: usize) -> u16 {
    self.grid.z_value(ij)
  }

  #[inline]
  pub fn zlevel(&self, level: u16) -> f64 {
    if level == 0 {
      self.z0
    } else {
      self.z1
    }
  }

  #[inline]
  pub fn corner_mean(&self, zone_i: usize, zone_j: usize) -> f64 {
    let imax = self.mesh.imax;
    let ij = zone_i + zone_j * imax;
    let corners = [ij, ij + 1, ij + imax, ij + imax + 1];
    corners.iter().map(|&c| self.mesh.z[c]).sum::<f64>() / 4.0
  }
}

/// Termination/hand-off codes shared by the three traversers (spec.md §4.2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
  /// Code 2: hit a boundary in filled mode; the driver continues as an
  /// edge-walker around the existing zone.
  Boundary,
  /// Code 3: the curve closed cleanly.
  Closed,
  /// Code 4: line-mode open end, or a filled-mode handoff pass 1 cannot yet
  /// close.
  OpenEnd,
  /// Code 5: hand off to the slit-cutter's down-stroke.
  SlitDown,
  /// Code 6: hand off to the slit-cutter's up-stroke.
  SlitUp,
  /// Not a termination: edge-walker handing control back to zone-crosser at
  /// the given level (0 or 2).
  ToLevel(u16),
}

impl Outcome {
  #[inline]
  pub fn is_terminal(self) -> bool {
    matches!(self, Outcome::Closed | Outcome::OpenEnd | Outcome::SlitDown | Outcome::SlitUp)
  }
}

/// Result of tracing one full curve from a single start point (spec.md §4.5).
pub struct CurveResult {
  /// Signed point count: negative when pass 1 could not yet close the curve
  /// (open-end or unresolved slit handoff).
  pub n: i64,
  pub outcome: Outcome,
}

/// Trace one curve starting at `(edge0, left0)`, alternating traversers
/// until a terminal outcome is reached.
pub fn drive_curve(ctx: &mut TraceCtx, edge0: usize, left0: Left, mut level: u16, pass: &mut Pass) -> CurveResult {
  let mut site = Site::new(edge0, left0);
  site.level0 = level;

  loop {
    let outcome = if !ctx.two_levels {
      // Line mode has only one level; never hand a stray `level == 2` (from
      // a boundary-start marker) down as `level.min(1) == 1`, which would
      // make `above()` vacuously false for every corner.
      zone_crosser::run(ctx, &mut site, 0, pass)
    } else if level < 2 {
      zone_crosser::run(ctx, &mut site, level.min(1), pass)
    } else {
      edge_walker::run(ctx, &mut site, pass)
    };

    match outcome {
      Outcome::Boundary => {
        level = 2;
        continue;
      }
      Outcome::ToLevel(new_level) => {
        level = new_level;
        continue;
      }
      Outcome::SlitDown => {
        let down = slit_cutter::run_down(ctx, &mut site, pass);
        if down.is_terminal() {
          return CurveResult { n: site.n, outcome: down };
        }
        level = match down {
          Outcome::ToLevel(l) => l,
          _ => level,
        };
        continue;
      }
      Outcome::SlitUp => {
        let up = slit_cutter::run_up(ctx, &mut site, pass);
        return CurveResult { n: site.n, outcome: up };
      }
      terminal => return CurveResult { n: site.n, outcome: terminal },
    }
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
