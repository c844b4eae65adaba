use super::*;
use crate::types::{PathCode, Point, PointKind};

fn raw(x: f64, y: f64, kind: PointKind, start_of_slit: bool) -> RawPoint {
  RawPoint { point: Point::new(x, y), kind, start_of_slit }
}

#[test]
fn test_open_polyline_no_close() {
  let points = vec![
    raw(2.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 1.0, PointKind::ChunkZone, false),
    raw(0.0, 2.0, PointKind::ChunkZone, false),
  ];
  let subpaths = build_part(&points, points.len(), false).unwrap();

  assert_eq!(subpaths.len(), 1);
  assert_eq!(subpaths[0].points.len(), 3);
  assert_eq!(subpaths[0].codes, vec![PathCode::MoveTo, PathCode::LineTo, PathCode::LineTo]);
}

#[test]
fn test_geometric_closure_rewrites_last_code() {
  let points = vec![
    raw(0.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 1.0, PointKind::ChunkZone, false),
    raw(0.0, 0.0, PointKind::ChunkZone, false),
  ];
  let subpaths = build_part(&points, points.len(), false).unwrap();

  assert_eq!(subpaths.len(), 1);
  assert_eq!(*subpaths[0].codes.last().unwrap(), PathCode::ClosePoly);
}

#[test]
fn test_filled_mode_always_closes() {
  let points = vec![
    raw(0.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 1.0, PointKind::ChunkZone, false),
  ];
  let subpaths = build_part(&points, points.len(), true).unwrap();

  assert_eq!(*subpaths[0].codes.last().unwrap(), PathCode::ClosePoly);
}

#[test]
fn test_slit_pair_joins_into_one_subpath() {
  // A down-stroke segment whose first point coincides with the outer
  // segment's last point: the two must join, dropping the duplicate.
  let points = vec![
    raw(0.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 0.0, PointKind::ChunkZone, false),
    raw(1.0, 0.0, PointKind::SlitDown, true),
    raw(2.0, 0.0, PointKind::SlitDown, false),
  ];
  let subpaths = build_part(&points, points.len(), false).unwrap();

  assert_eq!(subpaths.len(), 1);
  assert_eq!(subpaths[0].points.len(), 3);
  assert_eq!(subpaths[0].codes, vec![PathCode::MoveTo, PathCode::LineTo, PathCode::LineTo]);
}

#[test]
fn test_too_many_segments_is_invariant_error() {
  let points = vec![
    raw(0.0, 0.0, PointKind::ChunkZone, true),
    raw(1.0, 0.0, PointKind::ChunkZone, true),
    raw(2.0, 0.0, PointKind::ChunkZone, true),
    raw(3.0, 0.0, PointKind::ChunkZone, true),
  ];
  let err = build_part(&points, 2, true).unwrap_err();
  assert!(matches!(err, ContourError::Invariant(_)));
}
