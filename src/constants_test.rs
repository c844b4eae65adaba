use super::*;

const IMAX: usize = 10;

#[test]
fn test_forward_i_edge() {
  assert_eq!(forward(1, IMAX), 1);
  assert_eq!(forward(-1, IMAX), 1);
}

#[test]
fn test_forward_j_edge() {
  assert_eq!(forward(IMAX as isize, IMAX), IMAX as isize);
  assert_eq!(forward(-(IMAX as isize), IMAX), IMAX as isize);
}

#[test]
fn test_point0_point1_i_edge_positive() {
  // left = +1: zone to the right, edge anchored at `edge`.
  assert_eq!(point0(100, 1), 100);
  assert_eq!(point1(100, 1, IMAX), 101);
}

#[test]
fn test_point0_point1_i_edge_negative() {
  // left = -1: zone to the left, edge's first endpoint is one step back.
  assert_eq!(point0(100, -1), 99);
  assert_eq!(point1(100, -1, IMAX), 100);
}

#[test]
fn test_point0_point1_j_edge() {
  let imax = IMAX as isize;
  assert_eq!(point0(100, imax), 100);
  assert_eq!(point1(100, imax, IMAX), 100 + IMAX);
  assert_eq!(point0(100, -imax), 100 - IMAX);
  assert_eq!(point1(100, -imax, IMAX), 100);
}

#[test]
fn test_is_jedge() {
  assert!(!is_jedge(1, IMAX));
  assert!(!is_jedge(-1, IMAX));
  assert!(is_jedge(IMAX as isize, IMAX));
  assert!(is_jedge(-(IMAX as isize), IMAX));
}

#[test]
fn test_start_mark_all_four_directions() {
  assert_eq!(start_mark(1, IMAX), I1_START);
  assert_eq!(start_mark(-1, IMAX), I0_START);
  assert_eq!(start_mark(IMAX as isize, IMAX), J1_START);
  assert_eq!(start_mark(-(IMAX as isize), IMAX), J0_START);
}

#[test]
fn test_bit_masks_are_disjoint() {
  let bits = [
    Z_VALUE, ZONE_EX, I_BNDY, J_BNDY, I0_START, I1_START, J0_START, J1_START, START_ROW, SLIT_UP,
    SLIT_DN, OPEN_END, ALL_DONE, SLIT_DN_VISITED,
  ];
  // Z_VALUE is 2 bits wide; every other mask is a single bit. Check that no
  // single-bit mask collides with another single-bit mask.
  let singles = &bits[1..];
  for (i, &a) in singles.iter().enumerate() {
    assert_eq!(a.count_ones(), 1, "mask {a:#x} is not a single bit");
    for &b in &singles[i + 1..] {
      assert_eq!(a & b, 0, "masks {a:#x} and {b:#x} overlap");
    }
  }
}

#[test]
fn test_any_start_is_union_of_four_start_bits() {
  assert_eq!(ANY_START, I0_START | I1_START | J0_START | J1_START);
}

#[test]
fn test_cross_step_i_edge_is_perpendicular_j_step() {
  assert_eq!(cross_step(1, IMAX), IMAX as isize);
  assert_eq!(cross_step(-1, IMAX), -(IMAX as isize));
}

#[test]
fn test_cross_step_j_edge_is_perpendicular_i_step() {
  assert_eq!(cross_step(IMAX as isize, IMAX), 1);
  assert_eq!(cross_step(-(IMAX as isize), IMAX), -1);
}
