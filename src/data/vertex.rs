use num_traits::Float;

use super::Point;

/// One corner of the polygon being triangulated.
///
/// `index` is the vertex's position in the caller's input, which is what ends
/// up in the output index buffer. It never changes while the working polygon
/// shrinks around it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<T> {
  pub position: Point<T>,
  pub index: usize,
}

impl<T> Vertex<T> {
  pub fn new(position: Point<T>, index: usize) -> Vertex<T> {
    Vertex { position, index }
  }
}

/// Anything that can report a 2D position: the record type of a caller's
/// vertex buffer.
///
/// Homogeneous `[T; 4]` records only contribute their X and Y components.
pub trait PolygonVertex {
  type Scalar: Float;

  fn position(&self) -> Point<Self::Scalar>;
}

impl<T: Float> PolygonVertex for Point<T> {
  type Scalar = T;
  fn position(&self) -> Point<T> {
    *self
  }
}

impl<T: Float> PolygonVertex for Vertex<T> {
  type Scalar = T;
  fn position(&self) -> Point<T> {
    self.position
  }
}

impl<T: Float> PolygonVertex for [T; 2] {
  type Scalar = T;
  fn position(&self) -> Point<T> {
    Point::new(*self)
  }
}

impl<T: Float> PolygonVertex for [T; 4] {
  type Scalar = T;
  fn position(&self) -> Point<T> {
    Point::new([self[0], self[1]])
  }
}

impl<T: Float> PolygonVertex for (T, T) {
  type Scalar = T;
  fn position(&self) -> Point<T> {
    Point::new([self.0, self.1])
  }
}

impl<'a, V: PolygonVertex + ?Sized> PolygonVertex for &'a V {
  type Scalar = V::Scalar;
  fn position(&self) -> Point<V::Scalar> {
    (**self).position()
  }
}
