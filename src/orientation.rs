use num_traits::Zero;

use crate::data::PolygonVertex;

/// Rotational direction in which a polygon's vertices are listed, with the Y
/// axis pointing up.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindingOrder {
  ClockWise,
  CounterClockWise,
}
use WindingOrder::*;

impl WindingOrder {
  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  #[must_use]
  pub fn reverse(self) -> WindingOrder {
    match self {
      ClockWise => CounterClockWise,
      CounterClockWise => ClockWise,
    }
  }
}

/// Determine the winding order of a polygon loop by letting every corner
/// vote.
///
/// Each vertex `p2` (from the second onwards) looks at its predecessor `p1`
/// and its wrapping successor `p3`. A non-negative cross product of
/// `p1 - p2` and `p3 - p2` is a clockwise vote. Clockwise wins only with
/// strictly more votes, so ties (and loops with fewer than three vertices)
/// report [`WindingOrder::CounterClockWise`].
///
/// This counts corners, it does not measure area. A loop with more reflex
/// corners than convex ones is reported with the opposite of its true
/// orientation, and the triangulator will then walk it backwards.
///
/// # Examples
///
/// ```rust
/// # use gorgon_triangulator::{winding_order, WindingOrder};
/// let square = [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// assert_eq!(winding_order(&square), WindingOrder::CounterClockWise);
/// let mut reversed = square;
/// reversed.reverse();
/// assert_eq!(winding_order(&reversed), WindingOrder::ClockWise);
/// ```
// O(n)
pub fn winding_order<V: PolygonVertex>(vertices: &[V]) -> WindingOrder {
  let len = vertices.len();
  if len < 3 {
    return CounterClockWise;
  }
  let mut clockwise = 0usize;
  let mut counter_clockwise = 0usize;
  let zero = <V::Scalar as Zero>::zero();
  let mut p1 = vertices[0].position();
  for i in 1..len {
    let p2 = vertices[i].position();
    let p3 = vertices[(i + 1) % len].position();
    let e1 = p1 - p2;
    let e2 = p3 - p2;
    if e1.cross(&e2) >= zero {
      clockwise += 1;
    } else {
      counter_clockwise += 1;
    }
    p1 = p2;
  }
  if clockwise > counter_clockwise {
    ClockWise
  } else {
    CounterClockWise
  }
}

/// Reverse the vertex sequence in place.
pub fn reverse_winding_order<V>(vertices: &mut [V]) {
  vertices.reverse();
}

/// Reverse `vertices` in place unless they already wind in `order`. Returns
/// true if the sequence was reversed.
pub fn ensure_winding_order<V: PolygonVertex>(vertices: &mut [V], order: WindingOrder) -> bool {
  if winding_order(vertices) != order {
    reverse_winding_order(vertices);
    true
  } else {
    false
  }
}
