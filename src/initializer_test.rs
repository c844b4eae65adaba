use super::*;
use crate::types::Levels;

fn ramp_mesh(imax: usize, jmax: usize) -> Mesh {
  let mut x = Vec::with_capacity(imax * jmax);
  let mut y = Vec::with_capacity(imax * jmax);
  let mut z = Vec::with_capacity(imax * jmax);
  for j in 0..jmax {
    for i in 0..imax {
      x.push(i as f64);
      y.push(j as f64);
      z.push((i + j) as f64);
    }
  }
  Mesh::new(imax, jmax, x, y, z).unwrap()
}

#[test]
fn test_line_mode_forces_unchunked() {
  let chunks = normalize_chunk_sizes(2, 2, 5, 5, Levels::Line(1.0));
  assert_eq!(chunks.i, 4);
  assert_eq!(chunks.j, 4);
}

#[test]
fn test_filled_mode_normalizes_nonpositive_and_oversized_chunks() {
  let chunks = normalize_chunk_sizes(0, 100, 5, 5, Levels::Filled(0.0, 1.0));
  assert_eq!(chunks.i, 4);
  assert_eq!(chunks.j, 4);
}

#[test]
fn test_filled_mode_keeps_valid_chunk_size() {
  let chunks = normalize_chunk_sizes(2, 2, 5, 5, Levels::Filled(0.0, 1.0));
  assert_eq!(chunks.i, 2);
  assert_eq!(chunks.j, 2);
}

#[test]
fn test_ramp_line_mode_has_start_markers() {
  let mesh = ramp_mesh(3, 3);
  let chunks = normalize_chunk_sizes(0, 0, 3, 3, Levels::Line(2.0));
  let result = initialize(&mesh, Levels::Line(2.0), None, chunks);
  assert!(result.count > 0);
  assert!(!result.grid.test(0, ALL_DONE));
}

#[test]
fn test_flat_field_below_level_has_no_crossings() {
  let mesh = ramp_mesh(3, 3);
  // All z values are 0, well below the level: nothing is cut anywhere.
  let mut flat = mesh.clone();
  for v in flat.z.iter_mut() {
    *v = 0.0;
  }
  let chunks = normalize_chunk_sizes(0, 0, 3, 3, Levels::Line(5.0));
  let result = initialize(&flat, Levels::Line(5.0), None, chunks);
  assert_eq!(result.count, 0);
  assert!(result.grid.test(0, ALL_DONE));
}

#[test]
fn test_zone_existence_bit_matches_region() {
  let mesh = ramp_mesh(3, 3);
  let chunks = normalize_chunk_sizes(0, 0, 3, 3, Levels::Line(2.0));
  let result = initialize(&mesh, Levels::Line(2.0), None, chunks);
  // Zone (0,0) exists by default with no mask.
  assert!(result.grid.test(mesh.ij(0, 0), ZONE_EX));
  // No zone is anchored at the last row/column.
  assert!(!result.grid.test(mesh.ij(2, 0), ZONE_EX));
}
