/// Knobs for [`Triangulator`](crate::Triangulator).
///
/// The defaults reproduce the reference behavior exactly: a polygon that runs
/// out of ears yields a partial triangle list without complaint, and the
/// bounds always contain the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangulatorOptions {
  /// Report [`Error::IncompleteTriangulation`](crate::Error::IncompleteTriangulation)
  /// instead of returning a partial result.
  pub strict: bool,
  /// Seed the bounds with ±infinity rather than zero so they hug the input.
  pub exact_bounds: bool,
}

impl TriangulatorOptions {
  pub fn new() -> TriangulatorOptions {
    TriangulatorOptions::default()
  }

  #[must_use]
  pub fn with_strict(mut self, strict: bool) -> TriangulatorOptions {
    self.strict = strict;
    self
  }

  #[must_use]
  pub fn with_exact_bounds(mut self, exact_bounds: bool) -> TriangulatorOptions {
    self.exact_bounds = exact_bounds;
    self
  }
}
