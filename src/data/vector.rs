use num_traits::Float;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: Float> Vector<T> {
  pub fn squared_magnitude(&self) -> T {
    self.0[0] * self.0[0] + self.0[1] * self.0[1]
  }

  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Scale to unit length. A zero vector normalizes to NaN components.
  pub fn normalize(&self) -> Vector<T> {
    let len = self.magnitude();
    Vector([self.0[0] / len, self.0[1] / len])
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// The z component of the 3D cross product `self × other`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  /// The vector rotated 90° counter-clockwise: `(-y, x)`.
  pub fn left_normal(&self) -> Vector<T> {
    Vector([-self.0[1], self.0[0]])
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<T: Neg<Output = T>> Neg for Vector<T> {
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    let [x, y] = self.0;
    Vector([-x, -y])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_unit_length() {
    let v = Vector([3.0f64, 4.0]).normalize();
    assert!((v.magnitude() - 1.0).abs() < 1e-12);
    assert_eq!(v, Vector([0.6, 0.8]));
  }

  #[test]
  fn normalize_zero_is_nan() {
    let v = Vector([0.0f32, 0.0]).normalize();
    assert!(v[0].is_nan() && v[1].is_nan());
  }

  #[test]
  fn cross_sign() {
    let x = Vector([1.0f32, 0.0]);
    let y = Vector([0.0f32, 1.0]);
    assert_eq!(x.cross(&y), 1.0);
    assert_eq!(y.cross(&x), -1.0);
    assert_eq!(x.left_normal(), y);
    assert_eq!(x.dot(&y), 0.0);
    assert_eq!(-x, Vector([-1.0, -0.0]));
  }
}
