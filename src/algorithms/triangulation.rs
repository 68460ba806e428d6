use crate::data::{Bounds, PolygonVertex};
use crate::{Error, Triangulator, WindingOrder};

pub mod earclip;

/// Output of a triangulation: a flat triangle-list index buffer referring to
/// the caller's vertices, and the bounds of those vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangulation<T> {
  pub indices: Vec<usize>,
  pub bounds: Bounds<T>,
}

impl<T> Triangulation<T> {
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|trig| [trig[0], trig[1], trig[2]])
  }
}

/// One-shot triangulation with default options.
///
/// ```rust
/// # use gorgon_triangulator::{Triangulate, WindingOrder};
/// let hexagon = vec![(1.0f64, 0.0), (2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 2.0), (0.0, 1.0)];
/// let triangulation = hexagon.triangulate(WindingOrder::ClockWise).unwrap();
/// assert_eq!(triangulation.triangle_count(), 4);
/// ```
pub trait Triangulate {
  type Scalar;
  fn triangulate(self, order: WindingOrder) -> Result<Triangulation<Self::Scalar>, Error>;
}

impl<'a, V: PolygonVertex> Triangulate for &'a [V] {
  type Scalar = V::Scalar;
  fn triangulate(self, order: WindingOrder) -> Result<Triangulation<V::Scalar>, Error> {
    Triangulator::new().triangulate(self, order)
  }
}

impl<'a, V: PolygonVertex> Triangulate for &'a Vec<V> {
  type Scalar = V::Scalar;
  fn triangulate(self, order: WindingOrder) -> Result<Triangulation<V::Scalar>, Error> {
    self.as_slice().triangulate(order)
  }
}

impl<'a, V: PolygonVertex, const N: usize> Triangulate for &'a [V; N] {
  type Scalar = V::Scalar;
  fn triangulate(self, order: WindingOrder) -> Result<Triangulation<V::Scalar>, Error> {
    self.as_slice().triangulate(order)
  }
}
