use super::*;

#[test]
fn test_error_messages_are_stable() {
  assert_eq!(
    ContourError::InvalidDimensions { imax: 1, jmax: 3 }.to_string(),
    "mesh dimensions must be at least 2x2, got 1x3"
  );
  assert_eq!(
    ContourError::InvalidLevelOrder.to_string(),
    "filled levels must satisfy z0 < z1"
  );
  assert_eq!(
    ContourError::Invariant("pass 2 overran pass 1's count".into()).to_string(),
    "internal invariant violated: pass 2 overran pass 1's count"
  );
}
