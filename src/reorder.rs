//! Reorder/emitter: turns one curve's flat `(point, kind)` stream into the
//! subpaths of a polygon `Part`, with `MOVETO`/`LINETO`/`CLOSEPOLY` codes
//! (spec.md §4.6).

use smallvec::SmallVec;

use crate::error::ContourError;
use crate::types::{PathCode, Point, RawPoint, Subpath};

/// Most curves are a single segment; a slit-joined one adds one more per
/// inner curve it splices in. Four covers all but pathological meshes
/// without spilling to the heap.
type Segments = SmallVec<[Vec<RawPoint>; 4]>;

/// Split a curve's points into segments, cutting just before every point
/// flagged `start_of_slit` (spec.md §4.6 step 1).
fn split_segments(points: &[RawPoint]) -> Segments {
  let mut segments = Segments::new();
  let mut start = 0;
  for (i, p) in points.iter().enumerate() {
    if i > 0 && p.start_of_slit {
      segments.push(points[start..i].to_vec());
      start = i;
    }
  }
  segments.push(points[start..].to_vec());
  segments
}

#[inline]
fn coord_key(p: Point) -> (u64, u64) {
  (p.x.to_bits(), p.y.to_bits())
}

/// Join segments into subpaths by matching endpoint coordinates
/// (spec.md §4.6 step 2): segment `a`'s last point identical to segment
/// `b`'s first point means `b` continues `a`, dropping `b`'s duplicate
/// leading point.
fn join_segments(mut chains: Segments) -> Segments {
  loop {
    let mut merged_at = None;
    'search: for i in 0..chains.len() {
      for j in 0..chains.len() {
        if i == j {
          continue;
        }
        let last_i = chains[i].last().unwrap().point;
        let first_j = chains[j].first().unwrap().point;
        if coord_key(last_i) == coord_key(first_j) {
          merged_at = Some((i, j));
          break 'search;
        }
      }
    }
    let Some((i, j)) = merged_at else { break };
    let tail = chains.remove(j);
    let i = if j < i { i - 1 } else { i };
    chains[i].extend_from_slice(&tail[1..]);
  }
  chains
}

/// Reorder one curve's pass-2 points into a `Part`. `np` is the absolute
/// size pass 1 recorded for this curve, used only for the overflow check.
pub fn build_part(points: &[RawPoint], np: usize, two_levels: bool) -> Result<Vec<Subpath>, ContourError> {
  if points.is_empty() {
    return Ok(Vec::new());
  }

  let segments = split_segments(points);
  if segments.len() > np / 2 + 1 {
    return Err(ContourError::Invariant(format!(
      "reorder produced {} segments, exceeding the np/2+1 bound of {}",
      segments.len(),
      np / 2 + 1
    )));
  }

  let chains = join_segments(segments);
  let mut subpaths = Vec::with_capacity(chains.len());

  for chain in chains {
    let mut sub = Subpath { points: Vec::with_capacity(chain.len()), codes: Vec::with_capacity(chain.len()) };
    for (i, raw) in chain.iter().enumerate() {
      sub.points.push(raw.point);
      sub.codes.push(if i == 0 { PathCode::MoveTo } else { PathCode::LineTo });
    }

    let closes = sub.points.len() > 1 && coord_key(sub.points[0]) == coord_key(*sub.points.last().unwrap());
    if two_levels || closes {
      if let Some(last) = sub.codes.last_mut() {
        *last = PathCode::ClosePoly;
      }
    }
    subpaths.push(sub);
  }

  Ok(subpaths)
}

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;
