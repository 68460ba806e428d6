use num_traits::Float;

use super::{Point, Vertex};
use crate::WindingOrder;

/// An output primitive: three vertices of the working polygon, stored in the
/// order they were clipped. Winding is only normalized when the triangle is
/// turned into indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
  pub a: Vertex<T>,
  pub b: Vertex<T>,
  pub c: Vertex<T>,
}

impl<T> Triangle<T> {
  pub fn new(a: Vertex<T>, b: Vertex<T>, c: Vertex<T>) -> Triangle<T> {
    debug_assert!(
      a.index != b.index && b.index != c.index && a.index != c.index,
      "triangle corners must be distinct vertices"
    );
    Triangle { a, b, c }
  }

  pub fn vertices(&self) -> [&Vertex<T>; 3] {
    [&self.a, &self.b, &self.c]
  }

  /// Original indices of the corners. Counter-clockwise keeps the stored
  /// order `(a, b, c)`, clockwise emits `(c, b, a)`.
  pub fn indices(&self, order: WindingOrder) -> [usize; 3] {
    match order {
      WindingOrder::CounterClockWise => [self.a.index, self.b.index, self.c.index],
      WindingOrder::ClockWise => [self.c.index, self.b.index, self.a.index],
    }
  }
}

impl<T: Float> Triangle<T> {
  /// True if `vertex` is one of the corners, or its position lies inside the
  /// triangle by the crossing-number rule.
  // O(1)
  pub fn contains(&self, vertex: &Vertex<T>) -> bool {
    if *vertex == self.a || *vertex == self.b || *vertex == self.c {
      return true;
    }
    self.contains_point(&vertex.position)
  }

  /// Crossing-number test: cast a ray from `point` towards negative X and
  /// count how many edges it crosses.
  // O(1)
  pub fn contains_point(&self, point: &Point<T>) -> bool {
    let (a, b, c) = (&self.a.position, &self.b.position, &self.c.position);
    let mut odd_nodes = false;
    for (start, end) in [(c, a), (a, b), (b, c)] {
      if crosses_left_of(start, end, point) {
        odd_nodes = !odd_nodes;
      }
    }
    odd_nodes
  }

  pub fn signed_area_2x(&self) -> T {
    let (a, b, c) = (&self.a.position, &self.b.position, &self.c.position);
    (b - a).cross(&(c - a))
  }
}

// Does the edge `start -> end` straddle the horizontal line through `point`,
// crossing it strictly left of `point`?
fn crosses_left_of<T: Float>(start: &Point<T>, end: &Point<T>, point: &Point<T>) -> bool {
  let [sx, sy] = start.array;
  let [ex, ey] = end.array;
  let [px, py] = point.array;
  if (sy < py && ey >= py) || (ey < py && sy >= py) {
    let x = sx + (py - sy) / (ey - sy) * (ex - sx);
    x < px
  } else {
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn vertex(x: f32, y: f32, index: usize) -> Vertex<f32> {
    Vertex::new(Point::new([x, y]), index)
  }

  fn unit_triangle() -> Triangle<f32> {
    Triangle::new(vertex(0.0, 0.0, 0), vertex(4.0, 0.0, 1), vertex(0.0, 4.0, 2))
  }

  #[test]
  fn contains_interior() {
    let trig = unit_triangle();
    assert!(trig.contains(&vertex(1.0, 1.0, 7)));
    assert!(trig.contains_point(&Point::new([0.5, 3.0])));
  }

  #[test]
  fn excludes_exterior() {
    let trig = unit_triangle();
    assert!(!trig.contains(&vertex(3.0, 3.0, 7)));
    assert!(!trig.contains(&vertex(-1.0, 1.0, 7)));
    assert!(!trig.contains(&vertex(1.0, -1.0, 7)));
  }

  #[test]
  fn corners_are_contained() {
    let trig = unit_triangle();
    assert!(trig.contains(&trig.a));
    assert!(trig.contains(&trig.b));
    assert!(trig.contains(&trig.c));
  }

  #[test]
  fn indices_follow_winding() {
    let trig = unit_triangle();
    assert_eq!(trig.indices(WindingOrder::CounterClockWise), [0, 1, 2]);
    assert_eq!(trig.indices(WindingOrder::ClockWise), [2, 1, 0]);
  }

  #[test]
  fn signed_area() {
    let trig = unit_triangle();
    assert_eq!(trig.signed_area_2x(), 16.0);
    let flipped = Triangle::new(trig.c, trig.b, trig.a);
    assert_eq!(flipped.signed_area_2x(), -16.0);
  }
}
