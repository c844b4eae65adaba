//! Single sweep populating the state grid from the mesh, levels, region and
//! chunk sizes (spec.md §4.1).

use crate::constants::*;
use crate::mesh::Mesh;
use crate::region;
use crate::state::StateGrid;
use crate::types::Levels;

/// Normalized chunk sizes for one trace. Line mode always traces unchunked
/// (spec.md §3: "Used only in filled mode"); filled mode replaces a
/// non-positive or over-large configured size with the full mesh extent.
#[derive(Clone, Copy, Debug)]
pub struct ChunkSizes {
  pub i: usize,
  pub j: usize,
}

pub fn normalize_chunk_sizes(i_chunk_size: i64, j_chunk_size: i64, imax: usize, jmax: usize, levels: Levels) -> ChunkSizes {
  if !levels.is_filled() {
    return ChunkSizes { i: imax - 1, j: jmax - 1 };
  }
  let i = if i_chunk_size <= 0 || i_chunk_size as usize >= imax - 1 { imax - 1 } else { i_chunk_size as usize };
  let j = if j_chunk_size <= 0 || j_chunk_size as usize >= jmax - 1 { jmax - 1 } else { j_chunk_size as usize };
  ChunkSizes { i, j }
}

#[inline]
fn at_i_chunk_boundary(i: usize, chunk_i: usize, imax: usize) -> bool {
  i + 1 == imax - 1 || (i + 1) % chunk_i == 0
}

#[inline]
fn at_j_chunk_boundary(j: usize, chunk_j: usize, jmax: usize) -> bool {
  j + 1 == jmax - 1 || (j + 1) % chunk_j == 0
}

/// Outcome of the sweep: the populated grid and the initial start-marker
/// count (`count` in spec.md §3's `Site`).
pub struct InitResult {
  pub grid: StateGrid,
  pub count: i64,
}

pub fn initialize(mesh: &Mesh, levels: Levels, reg: Option<&[u8]>, chunks: ChunkSizes) -> InitResult {
  let imax = mesh.imax;
  let jmax = mesh.jmax;
  let two_levels = levels.is_filled();
  let z0 = levels.z0();
  let z1 = levels.z1();
  let mut grid = StateGrid::new(imax, jmax);

  let class_of = |i: usize, j: usize| -> u16 {
    let z = mesh.z[mesh.ij(i, j)];
    if two_levels && z > z1 {
      2
    } else if z > z0 {
      1
    } else {
      0
    }
  };
  let zex = |i: usize, j: usize| region::zone_exists(reg, imax, jmax, i, j);

  // Classification and zone existence.
  for j in 0..jmax {
    for i in 0..imax {
      let ij = mesh.ij(i, j);
      grid.set_z_value(ij, class_of(i, j));
      if zex(i, j) {
        grid.set_bits(ij, ZONE_EX);
      }
    }
  }

  // Boundary flags.
  for j in 0..jmax {
    for i in 0..imax {
      let ij = mesh.ij(i, j);
      if i + 1 < imax && (at_i_chunk_boundary(i, chunks.i, imax) || zex(i, j) != zex(i + 1, j)) {
        grid.set_bits(ij, I_BNDY);
      }
      if j + 1 < jmax && (at_j_chunk_boundary(j, chunks.j, jmax) || zex(i, j) != zex(i, j + 1)) {
        grid.set_bits(ij, J_BNDY);
      }
    }
  }

  let mut count: i64 = 0;

  // i-edge start marks: the edge between (i, j) and (i+1, j).
  for j in 0..jmax {
    for i in 0..imax.saturating_sub(1) {
      let ij = mesh.ij(i, j);
      if class_of(i, j) == class_of(i + 1, j) {
        continue;
      }
      let on_boundary = grid.test(ij, I_BNDY);
      if on_boundary || j == 0 {
        if j > 0 && zex(i, j - 1) {
          grid.set_bits(ij, I0_START);
          count += 1;
        }
        if zex(i, j) {
          grid.set_bits(ij, I1_START);
          count += 1;
        }
        continue;
      }
      // Interior cut edge: skip a side whose fill is already reachable via
      // an adjacent cut j-edge of the same zone, to avoid a redundant start.
      if j >= 1 {
        let below_left_cut = j >= 1 && class_of(i, j - 1) != class_of(i, j);
        if !below_left_cut && zex(i, j - 1) {
          grid.set_bits(ij, I0_START);
          count += 1;
        }
        let above_left_cut = j + 1 < jmax && class_of(i, j) != class_of(i, j + 1);
        if !above_left_cut && zex(i, j) {
          grid.set_bits(ij, I1_START);
          count += 1;
        }
      }
    }
  }

  // j-edge start marks: the edge between (i, j) and (i, j+1).
  for j in 0..jmax.saturating_sub(1) {
    for i in 1..imax {
      let ij = mesh.ij(i, j);
      if !grid.test(ij, J_BNDY) {
        continue;
      }
      let cut = class_of(i, j) != class_of(i, j + 1);
      if cut {
        if zex(i - 1, j) {
          grid.set_bits(ij, J0_START);
          count += 1;
        }
        if zex(i, j) {
          grid.set_bits(ij, J1_START);
          count += 1;
        }
      } else if two_levels && class_of(i, j) == 1 && zex(i - 1, j) != zex(i, j) {
        if zex(i, j) {
          grid.set_bits(ij, J1_START);
          count += 1;
        } else {
          grid.set_bits(ij, J0_START);
          count += 1;
        }
      }
    }
  }

  // START_ROW: first row with any start marker.
  'rows: for j in 0..jmax {
    for i in 0..imax {
      let ij = mesh.ij(i, j);
      if grid.test(ij, ANY_START) {
        grid.set_bits(mesh.ij(0, j), START_ROW);
        break 'rows;
      }
    }
  }

  if count == 0 {
    grid.set_bits(0, ALL_DONE);
  }

  InitResult { grid, count }
}

#[cfg(test)]
#[path = "initializer_test.rs"]
mod initializer_test;
