//! Error type for mesh construction and tracing (spec.md §10.2).

use thiserror::Error;

/// Everything that can go wrong building a [`crate::mesh::Mesh`] or running
/// a [`crate::session::Session::trace`]. Internally-guaranteed invariants
/// still use `debug_assert!`; this type is reserved for conditions that
/// depend on caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
  #[error("mesh dimensions must be at least 2x2, got {imax}x{jmax}")]
  InvalidDimensions { imax: usize, jmax: usize },

  #[error("field array length mismatch: expected {expected}, got x={x} y={y} z={z}")]
  ShapeMismatch { expected: usize, x: usize, y: usize, z: usize },

  #[error("mask length must equal imax*jmax")]
  MaskShapeMismatch,

  #[error("z field contains a non-finite value")]
  NonFiniteField,

  #[error("level value must be finite")]
  NonFiniteLevel,

  #[error("filled levels must satisfy z0 < z1")]
  InvalidLevelOrder,

  #[error("internal invariant violated: {0}")]
  Invariant(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
