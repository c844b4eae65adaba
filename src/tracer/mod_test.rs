use super::*;
use crate::mesh::Mesh;
use crate::state::{SaddleCache, StateGrid};

#[test]
fn test_drive_curve_line_mode_open_end() {
  // Same 2x2 vertical-step fixture as zone_crosser's own tests: a single
  // straight channel with no closure, terminating as a line-mode open end.
  let mesh = Mesh::new(2, 2, vec![0.0, 1.0, 0.0, 1.0], vec![0.0, 0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
  let mut grid = StateGrid::new(2, 2);
  for j in 0..2 {
    for i in 0..2 {
      grid.set_bits(mesh.ij(i, j), I_BNDY | J_BNDY);
    }
  }
  let mut saddle = SaddleCache::new(2, 2);
  let mut ctx = TraceCtx { mesh: &mesh, grid: &mut grid, saddle: &mut saddle, z0: 0.5, z1: 0.5, two_levels: false, count: 1 };

  let mut pass = Pass::Topology;
  let result = drive_curve(&mut ctx, mesh.ij(0, 0), 2, 0, &mut pass);

  assert_eq!(result.outcome, Outcome::OpenEnd);
  assert!(result.n >= 1);
}

#[test]
fn test_drive_curve_filled_boundary_walk_closes() {
  // Same 2x2 perimeter fixture as the edge-walker's own tests, entered
  // directly at level 2 (as the driver would after a zone-crosser boundary
  // hand-off).
  let mesh = Mesh::new(2, 2, vec![0.0, 1.0, 0.0, 1.0], vec![0.0, 0.0, 1.0, 1.0], vec![1.0, 1.0, 1.0, 1.0]).unwrap();
  let mut grid = StateGrid::new(2, 2);
  for ij in 0..4 {
    grid.set_z_value(ij, 1);
  }
  grid.set_bits(mesh.ij(0, 0), I_BNDY | J_BNDY);
  grid.set_bits(mesh.ij(1, 0), J_BNDY);
  grid.set_bits(mesh.ij(0, 1), I_BNDY);
  let mut saddle = SaddleCache::new(2, 2);
  let mut ctx = TraceCtx { mesh: &mesh, grid: &mut grid, saddle: &mut saddle, z0: 0.0, z1: 2.0, two_levels: true, count: 1 };

  let mut pass = Pass::Topology;
  let result = drive_curve(&mut ctx, mesh.ij(0, 0), 1, 2, &mut pass);

  assert_eq!(result.outcome, Outcome::Closed);
  assert_eq!(result.n, 4);
}
