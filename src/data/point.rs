use num_traits::Float;
use std::ops::Index;
use std::ops::Sub;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: Float> Point<T> {
  pub fn zero() -> Self {
    Point::new([T::zero(), T::zero()])
  }

  /// Component-wise minimum. NaN components lose to the other operand.
  pub fn min(&self, other: &Point<T>) -> Point<T> {
    Point::new([
      self.array[0].min(other.array[0]),
      self.array[1].min(other.array[1]),
    ])
  }

  /// Component-wise maximum. NaN components lose to the other operand.
  pub fn max(&self, other: &Point<T>) -> Point<T> {
    Point::new([
      self.array[0].max(other.array[0]),
      self.array[1].max(other.array[1]),
    ])
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

// point - point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self, other: &'a Point<T>) -> Self::Output {
    Vector([
      self.array[0] - other.array[0],
      self.array[1] - other.array[1],
    ])
  }
}

impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
