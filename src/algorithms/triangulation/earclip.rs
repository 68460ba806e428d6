use claims::debug_assert_gt;
use log::{debug, trace, warn};
use num_traits::Float;
use std::collections::VecDeque;

use crate::data::{Bounds, PolygonVertex, Slot, Triangle, Vertex, VertexList};
use crate::{ensure_winding_order, Error, Triangulation, TriangulatorOptions, WindingOrder};

// Every live vertex is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
  Convex,
  Reflex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Initialized,
  Clipping,
  Finalizing,
  Done,
}

/// Ear-clipping triangulator for simple polygons.
///
/// The polygon is first walked counter-clockwise. Every vertex is classified
/// as convex or reflex, and convex vertices whose neighbour triangle holds no
/// reflex vertex are ears. The front ear is clipped, its two neighbours are
/// re-examined, and newly qualifying ears jump to the front of the queue.
/// This repeats until three vertices remain, which form the last triangle.
///
/// A triangulator owns its working buffers and can be reused; every call to
/// [`prepare`](Triangulator::prepare) or
/// [`triangulate`](Triangulator::triangulate) starts from scratch.
///
/// Malformed input (self-intersecting or degenerate loops) can run out of
/// ears early. The vertices left over are dropped from the output unless
/// [`TriangulatorOptions::strict`] is set.
///
/// O(n^2) in the worst case: each ear test scans the reflex vertices.
#[derive(Debug, Clone)]
pub struct Triangulator<T> {
  options: TriangulatorOptions,
  polygon: VertexList<T>,
  scratch: Vec<Vertex<T>>,
  // Slot -> class. Slots of clipped vertices keep their last class.
  classes: Vec<Class>,
  reflex: Vec<Slot>,
  ears: VecDeque<Slot>,
  ear_flags: Vec<bool>,
  triangles: Vec<Triangle<T>>,
  phase: Phase,
}

impl<T: Float> Default for Triangulator<T> {
  fn default() -> Self {
    Triangulator::new()
  }
}

impl<T: Float> Triangulator<T> {
  pub fn new() -> Triangulator<T> {
    Triangulator::with_options(TriangulatorOptions::default())
  }

  pub fn with_options(options: TriangulatorOptions) -> Triangulator<T> {
    Triangulator {
      options,
      polygon: VertexList::new(),
      scratch: Vec::new(),
      classes: Vec::new(),
      reflex: Vec::new(),
      ears: VecDeque::new(),
      ear_flags: Vec::new(),
      triangles: Vec::new(),
      phase: Phase::Done,
    }
  }

  pub fn options(&self) -> TriangulatorOptions {
    self.options
  }

  pub fn set_options(&mut self, options: TriangulatorOptions) {
    self.options = options;
  }

  /// Triangulate `vertices` and return indices into it, `3 * triangles` long,
  /// along with the bounds of every input vertex.
  ///
  /// Triangles come out in clipping order with the final remainder last.
  /// `order` picks how each triangle's corners are listed.
  ///
  /// # Errors
  ///
  /// * [`Error::InsufficientVertices`] for fewer than three vertices.
  /// * [`Error::IncompleteTriangulation`] in strict mode when the polygon
  ///   runs out of ears.
  pub fn triangulate<V>(
    &mut self,
    vertices: &[V],
    order: WindingOrder,
  ) -> Result<Triangulation<T>, Error>
  where
    V: PolygonVertex<Scalar = T>,
  {
    let mut indices = Vec::with_capacity(vertices.len().saturating_sub(2) * 3);
    let bounds = self.triangulate_into(vertices, order, &mut indices)?;
    Ok(Triangulation { indices, bounds })
  }

  /// Like [`triangulate`](Triangulator::triangulate) but writes the indices
  /// into a caller-owned buffer, which is cleared first.
  pub fn triangulate_into<V>(
    &mut self,
    vertices: &[V],
    order: WindingOrder,
    indices: &mut Vec<usize>,
  ) -> Result<Bounds<T>, Error>
  where
    V: PolygonVertex<Scalar = T>,
  {
    self.prepare(vertices)?;
    self.run()?;
    indices.clear();
    indices.reserve(self.triangles.len() * 3);
    for triangle in &self.triangles {
      indices.extend_from_slice(&triangle.indices(order));
    }
    Ok(Bounds::from_points(
      vertices.iter().map(|v| v.position()),
      self.options.exact_bounds,
    ))
  }

  /// Load a polygon and classify its vertices, without clipping anything.
  /// Vertices are tagged with their position in `vertices` and walked in
  /// counter-clockwise order.
  pub fn prepare<V>(&mut self, vertices: &[V]) -> Result<(), Error>
  where
    V: PolygonVertex<Scalar = T>,
  {
    self.triangles.clear();
    self.ears.clear();
    self.reflex.clear();
    self.phase = Phase::Done;
    if vertices.len() < 3 {
      self.polygon.reset(std::iter::empty());
      return Err(Error::InsufficientVertices);
    }
    self.scratch.clear();
    self.scratch.extend(
      vertices
        .iter()
        .enumerate()
        .map(|(index, v)| Vertex::new(v.position(), index)),
    );
    if ensure_winding_order(&mut self.scratch, WindingOrder::CounterClockWise) {
      debug!("input winds clockwise, walking it in reverse");
    }
    self.polygon.reset(self.scratch.drain(..));

    self.ear_flags.clear();
    self.ear_flags.resize(self.polygon.capacity(), false);
    self.find_convex_and_reflex_vertices();
    self.find_ear_vertices();
    self.phase = Phase::Initialized;
    debug!(
      "{} vertices: {} reflex, {} ears",
      self.polygon.len(),
      self.reflex.len(),
      self.ears.len()
    );
    Ok(())
  }

  /// Clip the prepared polygon down to triangles.
  ///
  /// Returns every triangle emitted since the last
  /// [`prepare`](Triangulator::prepare).
  pub fn run(&mut self) -> Result<&[Triangle<T>], Error> {
    while let Some(triangle) = self.step() {
      self.triangles.push(triangle);
    }
    let remaining = self.remaining();
    if remaining > 3 && self.options.strict {
      return Err(Error::IncompleteTriangulation { remaining });
    }
    debug!("emitted {} triangles", self.triangles.len());
    Ok(&self.triangles)
  }

  /// Triangles emitted so far.
  pub fn triangles(&self) -> &[Triangle<T>] {
    &self.triangles
  }

  /// Number of vertices still in the working polygon.
  pub fn remaining(&self) -> usize {
    self.polygon.len()
  }

  /// Convex vertices of the working polygon, in polygon order.
  pub fn convex_vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
    self
      .polygon
      .slots()
      .filter(move |&slot| self.classes[slot] == Class::Convex)
      .map(move |slot| self.polygon.vertex(slot))
  }

  /// Reflex vertices of the working polygon, in the order they were found.
  pub fn reflex_vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
    self.reflex.iter().map(move |&slot| self.polygon.vertex(slot))
  }

  /// Pending ears, next to be clipped first.
  pub fn ear_vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
    self.ears.iter().map(move |&slot| self.polygon.vertex(slot))
  }

  // Advance the state machine until it produces a triangle or finishes.
  fn step(&mut self) -> Option<Triangle<T>> {
    loop {
      match self.phase {
        Phase::Initialized => self.phase = Phase::Clipping,
        Phase::Clipping => {
          if self.polygon.len() <= 3 {
            self.phase = Phase::Finalizing;
          } else if let Some(triangle) = self.clip_next_ear() {
            return Some(triangle);
          } else {
            warn!(
              "ran out of ears with {} vertices left, dropping them",
              self.polygon.len()
            );
            self.phase = Phase::Done;
          }
        }
        Phase::Finalizing => {
          self.phase = Phase::Done;
          return self.final_triangle();
        }
        Phase::Done => return None,
      }
    }
  }

  fn final_triangle(&self) -> Option<Triangle<T>> {
    if self.polygon.len() != 3 {
      return None;
    }
    Some(Triangle::new(
      *self.polygon.get(0)?,
      *self.polygon.get(1)?,
      *self.polygon.get(2)?,
    ))
  }

  fn clip_next_ear(&mut self) -> Option<Triangle<T>> {
    debug_assert_gt!(self.polygon.len(), 3);
    let ear = self.ears.pop_front()?;
    self.ear_flags[ear] = false;
    let prev = self.polygon.prev(ear);
    let next = self.polygon.next(ear);
    let triangle = Triangle::new(
      *self.polygon.vertex(ear),
      *self.polygon.vertex(next),
      *self.polygon.vertex(prev),
    );
    self.polygon.remove(ear);
    trace!(
      "clipped {} between {} and {}",
      triangle.a.index,
      triangle.c.index,
      triangle.b.index
    );
    self.validate_adjacent_vertex(prev);
    self.validate_adjacent_vertex(next);
    Some(triangle)
  }

  fn find_convex_and_reflex_vertices(&mut self) {
    self.classes.clear();
    self.reflex.clear();
    for slot in 0..self.polygon.capacity() {
      if self.is_convex(slot) {
        self.classes.push(Class::Convex);
      } else {
        self.classes.push(Class::Reflex);
        self.reflex.push(slot);
      }
    }
  }

  fn find_ear_vertices(&mut self) {
    for slot in 0..self.polygon.capacity() {
      if self.classes[slot] == Class::Convex && self.is_ear(slot) {
        self.ears.push_back(slot);
        self.ear_flags[slot] = true;
      }
    }
  }

  // Re-examine a neighbour of a freshly clipped ear. Reflex vertices can
  // become convex as their neighbourhood shrinks, never the other way round.
  fn validate_adjacent_vertex(&mut self, slot: Slot) {
    if self.classes[slot] == Class::Reflex && self.is_convex(slot) {
      self.classes[slot] = Class::Convex;
      self.reflex.retain(|&other| other != slot);
      trace!("{} turned convex", self.polygon.vertex(slot).index);
    }

    if self.classes[slot] == Class::Convex {
      let was_ear = self.ear_flags[slot];
      let is_ear = self.is_ear(slot);
      if was_ear && !is_ear {
        self.ears.retain(|&other| other != slot);
        self.ear_flags[slot] = false;
        trace!("{} is no longer an ear", self.polygon.vertex(slot).index);
      } else if !was_ear && is_ear {
        self.ears.push_front(slot);
        self.ear_flags[slot] = true;
        trace!("{} became an ear", self.polygon.vertex(slot).index);
      }
    }
  }

  // Convex iff the turn at `slot` doesn't go right: the incoming direction
  // has a non-positive component along the left normal of the outgoing one.
  fn is_convex(&self, slot: Slot) -> bool {
    let prev = self.polygon.vertex(self.polygon.prev(slot)).position;
    let current = self.polygon.vertex(slot).position;
    let next = self.polygon.vertex(self.polygon.next(slot)).position;
    let d1 = (current - prev).normalize();
    let d2 = (next - current).normalize();
    d1.dot(&d2.left_normal()) <= T::zero()
  }

  fn is_ear(&self, slot: Slot) -> bool {
    let prev = self.polygon.prev(slot);
    let next = self.polygon.next(slot);
    let triangle = Triangle::new(
      *self.polygon.vertex(prev),
      *self.polygon.vertex(slot),
      *self.polygon.vertex(next),
    );
    !self
      .reflex
      .iter()
      .filter(|&&other| other != prev && other != slot && other != next)
      .any(|&other| triangle.contains(self.polygon.vertex(other)))
  }
}
