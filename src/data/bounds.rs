use num_traits::Float;

use super::Point;

/// Axis-aligned rectangle in the same space as the input vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
  pub left: T,
  pub top: T,
  pub right: T,
  pub bottom: T,
}

impl<T: Float> Bounds<T> {
  pub fn new(left: T, top: T, right: T, bottom: T) -> Bounds<T> {
    Bounds {
      left,
      top,
      right,
      bottom,
    }
  }

  /// Accumulator seed that includes the origin. Every edge is clamped
  /// through zero: `left`/`top` never rise above 0 and `right`/`bottom`
  /// never fall below it.
  pub fn zero() -> Bounds<T> {
    Bounds::from_corners(Point::zero(), Point::zero())
  }

  pub fn from_corners(top_left: Point<T>, bottom_right: Point<T>) -> Bounds<T> {
    let [left, top] = top_left.array;
    let [right, bottom] = bottom_right.array;
    Bounds::new(left, top, right, bottom)
  }

  /// Accumulator seed that includes nothing.
  pub fn empty() -> Bounds<T> {
    Bounds::new(
      T::infinity(),
      T::infinity(),
      T::neg_infinity(),
      T::neg_infinity(),
    )
  }

  /// Bounds over `points`. With `exact` unset the accumulator starts from
  /// [`Bounds::zero`], so the result always contains the origin.
  pub fn from_points<I>(points: I, exact: bool) -> Bounds<T>
  where
    I: IntoIterator<Item = Point<T>>,
  {
    let seed = if exact { Bounds::empty() } else { Bounds::zero() };
    points.into_iter().fold(seed, |mut bounds, pt| {
      bounds.include(&pt);
      bounds
    })
  }

  /// Grow to cover `pt`. NaN coordinates are ignored.
  pub fn include(&mut self, pt: &Point<T>) {
    *self = Bounds::from_corners(self.top_left().min(pt), self.bottom_right().max(pt));
  }

  pub fn width(&self) -> T {
    self.right - self.left
  }

  pub fn height(&self) -> T {
    self.bottom - self.top
  }

  pub fn is_empty(&self) -> bool {
    !(self.left <= self.right && self.top <= self.bottom)
  }

  pub fn top_left(&self) -> Point<T> {
    Point::new([self.left, self.top])
  }

  pub fn bottom_right(&self) -> Point<T> {
    Point::new([self.right, self.bottom])
  }
}
