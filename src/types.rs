//! Core data types for the contour tracer's public surface.

use glam::DVec2;

/// Scalar field sample type. The tracer only ever compares and interpolates
/// these; it never needs anything fancier than `f64` arithmetic.
pub type Scalar = f64;

/// A traced vertex in mesh coordinates.
pub type Point = DVec2;

/// Which of the two active levels a curve/segment is associated with.
/// `Lower` mirrors `Z_VALUE == 0` (below `z0`), `Upper` mirrors
/// `Z_VALUE == 2` (above `z1`). There is no middle variant: a level can
/// only be the lower or the upper bound of the filled strip, never the
/// interior class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelSide {
  Lower,
  Upper,
}

impl LevelSide {
  #[inline]
  pub(crate) fn as_class(self) -> u16 {
    match self {
      LevelSide::Lower => 0,
      LevelSide::Upper => 2,
    }
  }

  #[inline]
  pub(crate) fn from_class(class: u16) -> Self {
    if class == 0 {
      LevelSide::Lower
    } else {
      LevelSide::Upper
    }
  }
}

/// The levels a trace operates at: a single iso-level (line mode) or a pair
/// of levels bounding a filled strip (filled mode), `z0 < z1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Levels {
  Line(Scalar),
  Filled(Scalar, Scalar),
}

impl Levels {
  #[inline]
  pub(crate) fn z0(self) -> Scalar {
    match self {
      Levels::Line(z) => z,
      Levels::Filled(z0, _) => z0,
    }
  }

  #[inline]
  pub(crate) fn z1(self) -> Scalar {
    match self {
      Levels::Line(z) => z,
      Levels::Filled(_, z1) => z1,
    }
  }

  #[inline]
  pub(crate) fn is_filled(self) -> bool {
    matches!(self, Levels::Filled(..))
  }
}

/// Output path-code convention, compatible with the host's path-rendering
/// convention (spec.md §6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PathCode {
  MoveTo = 1,
  LineTo = 2,
  ClosePoly = 79,
}

/// Per-point kind, assigned during pass 2 emission and consumed by reorder
/// (spec.md §4.6). The `start_of_slit` flag is the `+16` sentinel from the
/// spec, carried here as an explicit field rather than an arithmetic offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
  /// An ordinary zone crossing (`ChunkZone`, tag 101).
  ChunkZone,
  /// A boundary corner emitted by the edge-walker (`EdgeCorner`, tag 102).
  EdgeCorner,
  /// A boundary-cut interpolation for a curve that started on a non-between
  /// boundary point (`EdgeCut2`, tag 103).
  EdgeCut2,
  /// A point on a slit up-stroke (`SlitUp`, tag 104).
  SlitUp,
  /// A point on a slit down-stroke (`SlitDown`, tag 105).
  SlitDown,
}

impl PointKind {
  /// Canonical numeric tag, matching spec.md §4.6.
  pub fn tag(self) -> u16 {
    match self {
      PointKind::ChunkZone => 101,
      PointKind::EdgeCorner => 102,
      PointKind::EdgeCut2 => 103,
      PointKind::SlitUp => 104,
      PointKind::SlitDown => 105,
    }
  }
}

/// One emitted point plus its kind and slit-start flag, as produced by pass 2
/// before reorder groups them into polygon parts.
#[derive(Clone, Copy, Debug)]
pub struct RawPoint {
  pub point: Point,
  pub kind: PointKind,
  /// The `+16` sentinel: true when this point starts a slit segment inside
  /// its part (spec.md §4.6, "Kind-code offset").
  pub start_of_slit: bool,
}

/// Output layout selector for the outer binding (spec.md §6). The reorder
/// step in §4.6 always produces the `*Code` representation internally;
/// the `*Offset` variant is a reshaping of the same data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
  /// One `(points, codes)` pair per subpath, each returned separately.
  Separate = 101,
  /// Same as `Separate`; kept distinct for host API parity.
  SeparateCode = 102,
  /// All subpaths of a part concatenated into one `(points, codes)` pair.
  ChunkCombinedCode = 103,
  /// All subpaths of a part concatenated into one points array, with a
  /// separate offsets array marking subpath starts instead of codes.
  ChunkCombinedOffset = 104,
}

/// A single ordered subpath: points plus path codes of equal length.
#[derive(Clone, Debug, Default)]
pub struct Subpath {
  pub points: Vec<Point>,
  pub codes: Vec<PathCode>,
}

/// One output part (one contiguous curve from pass 2), reorganized by
/// `reorder` into one or more subpaths (spec.md §4.6).
#[derive(Clone, Debug, Default)]
pub struct Part {
  pub subpaths: Vec<Subpath>,
}

impl Part {
  /// Concatenate this part's subpaths into one `(points, codes)` pair,
  /// as required by `LineType::ChunkCombinedCode`.
  pub fn combined_code(&self) -> (Vec<Point>, Vec<PathCode>) {
    let mut points = Vec::new();
    let mut codes = Vec::new();
    for sub in &self.subpaths {
      points.extend_from_slice(&sub.points);
      codes.extend_from_slice(&sub.codes);
    }
    (points, codes)
  }

  /// Concatenate this part's subpaths into one points array plus an offsets
  /// array (one entry per subpath start, plus a trailing total), as required
  /// by `LineType::ChunkCombinedOffset`.
  pub fn combined_offset(&self) -> (Vec<Point>, Vec<usize>) {
    let mut points = Vec::new();
    let mut offsets = Vec::with_capacity(self.subpaths.len() + 1);
    offsets.push(0);
    for sub in &self.subpaths {
      points.extend_from_slice(&sub.points);
      offsets.push(points.len());
    }
    (points, offsets)
  }
}

/// Final result of a trace: one `Part` per top-level curve, plus (optionally)
/// the raw pre-reorder points for diagnostics (spec.md §10.7 `all_kinds`).
#[derive(Clone, Debug, Default)]
pub struct TraceOutput {
  pub parts: Vec<Part>,
  pub raw: Option<Vec<RawPoint>>,
}

/// Configuration for a trace, analogous to the teacher's `MeshConfig`
/// builder. Chunk sizes are raw user input here; `Session::new` normalizes
/// them per spec.md §3/§4.1 (<=0 or >= dimension-1 becomes dimension-1).
#[derive(Clone, Copy, Debug)]
pub struct TraceConfig {
  pub i_chunk_size: i64,
  pub j_chunk_size: i64,
  /// Which output layout the caller intends to read back. `Part` always
  /// carries code-form subpaths; this only documents which of
  /// `Part::subpaths`, [`Part::combined_code`], or [`Part::combined_offset`]
  /// the caller should pull from (spec.md §6).
  pub line_type: LineType,
  /// Keep the pre-reorder flat `(point, kind)` stream alongside the final
  /// polygons, for diagnostics and testing (spec.md §10.7).
  pub all_kinds: bool,
}

impl Default for TraceConfig {
  fn default() -> Self {
    Self {
      i_chunk_size: 0,
      j_chunk_size: 0,
      line_type: LineType::SeparateCode,
      all_kinds: false,
    }
  }
}

impl TraceConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_chunk_size(mut self, i_chunk_size: i64, j_chunk_size: i64) -> Self {
    self.i_chunk_size = i_chunk_size;
    self.j_chunk_size = j_chunk_size;
    self
  }

  pub fn with_line_type(mut self, line_type: LineType) -> Self {
    self.line_type = line_type;
    self
  }

  pub fn with_all_kinds(mut self, all_kinds: bool) -> Self {
    self.all_kinds = all_kinds;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
