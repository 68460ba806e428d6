// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Ear-clipping triangulation of simple polygons.
//!
//! A polygon hull is given as an ordered list of vertex records (anything that
//! implements [`PolygonVertex`](data::PolygonVertex)). The [`Triangulator`]
//! turns it into a flat index buffer that refers back to the caller's vertex
//! buffer, plus the axis-aligned bounds of the input.
//!
//! ```rust
//! # use gorgon_triangulator::{Triangulator, WindingOrder};
//! let square = [[0.0f32, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//! let mut triangulator = Triangulator::new();
//! let triangulation = triangulator
//!   .triangulate(&square, WindingOrder::CounterClockWise)
//!   .unwrap();
//! assert_eq!(triangulation.triangle_count(), 2);
//! assert_eq!(triangulation.bounds.right, 1.0);
//! ```
use std::fmt;

pub mod algorithms;
pub mod data;
pub mod mesh;
mod options;
mod orientation;

#[doc(inline)]
pub use algorithms::triangulation::earclip::Triangulator;
#[doc(inline)]
pub use algorithms::triangulation::{Triangulate, Triangulation};
pub use options::TriangulatorOptions;
pub use orientation::{ensure_winding_order, reverse_winding_order, winding_order, WindingOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// The ear set ran dry before the polygon was reduced to a single triangle.
  /// Only reported when [`TriangulatorOptions::strict`] is set.
  IncompleteTriangulation {
    remaining: usize,
  },
  IndexOutOfRange {
    index: usize,
    len: usize,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::IncompleteTriangulation { remaining } => write!(
        f,
        "Ran out of ears with {} vertices left; the polygon is likely self-intersecting",
        remaining
      ),
      Error::IndexOutOfRange { index, len } => {
        write!(f, "Index {} is out of range for {} vertices", index, len)
      }
    }
  }
}

impl std::error::Error for Error {}
