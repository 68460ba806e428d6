//! Building an indexed triangle mesh from an editable polygon hull.
use log::debug;

use crate::data::{Bounds, PolygonVertex};
use crate::{ensure_winding_order, Error, Triangulator, TriangulatorOptions, WindingOrder};

/// A triangulated polygon, ready to be uploaded as a vertex buffer plus an
/// index buffer.
///
/// `vertices` wind counter-clockwise and so do the triangles in `indices`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMesh<V: PolygonVertex> {
  pub vertices: Vec<V>,
  pub indices: Vec<usize>,
  pub bounds: Bounds<V::Scalar>,
}

impl<V: PolygonVertex> PolygonMesh<V> {
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn index_count(&self) -> usize {
    self.indices.len()
  }
}

/// Collects the hull of a polygon and turns it into a [`PolygonMesh`].
///
/// ```rust
/// # use gorgon_triangulator::mesh::PolygonMeshBuilder;
/// let mut builder = PolygonMeshBuilder::new();
/// builder
///   .add_vertex([0.0f32, 0.0])
///   .add_vertex([0.0, 1.0])
///   .add_vertex([1.0, 1.0])
///   .add_vertex([1.0, 0.0]);
/// let mesh = builder.build().unwrap();
/// // The hull was listed clockwise; the mesh is not.
/// assert_eq!(mesh.vertices[0], [1.0, 0.0]);
/// assert_eq!(mesh.index_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct PolygonMeshBuilder<V: PolygonVertex> {
  vertices: Vec<V>,
  triangulator: Triangulator<V::Scalar>,
}

impl<V: PolygonVertex + Clone> Default for PolygonMeshBuilder<V> {
  fn default() -> Self {
    PolygonMeshBuilder::new()
  }
}

impl<V: PolygonVertex + Clone> PolygonMeshBuilder<V> {
  pub fn new() -> PolygonMeshBuilder<V> {
    PolygonMeshBuilder::with_options(TriangulatorOptions::default())
  }

  pub fn with_options(options: TriangulatorOptions) -> PolygonMeshBuilder<V> {
    PolygonMeshBuilder {
      vertices: Vec::new(),
      triangulator: Triangulator::with_options(options),
    }
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn vertices(&self) -> &[V] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, V> {
    self.vertices.iter()
  }

  pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
    self.vertices.push(vertex);
    self
  }

  pub fn add_vertices<I>(&mut self, vertices: I) -> &mut Self
  where
    I: IntoIterator<Item = V>,
  {
    self.vertices.extend(vertices);
    self
  }

  /// Insert before `index`. `index == vertex_count()` appends.
  pub fn insert_vertex(&mut self, index: usize, vertex: V) -> Result<&mut Self, Error> {
    self.check_insert(index)?;
    self.vertices.insert(index, vertex);
    Ok(self)
  }

  pub fn insert_vertices<I>(&mut self, index: usize, vertices: I) -> Result<&mut Self, Error>
  where
    I: IntoIterator<Item = V>,
  {
    self.check_insert(index)?;
    let tail = self.vertices.split_off(index);
    self.vertices.extend(vertices);
    self.vertices.extend(tail);
    Ok(self)
  }

  pub fn remove_vertex(&mut self, index: usize) -> Result<&mut Self, Error> {
    self.check_index(index)?;
    self.vertices.remove(index);
    Ok(self)
  }

  /// Remove the first vertex sitting at the same position as `vertex`. Does
  /// nothing if there is none.
  pub fn remove_vertex_value(&mut self, vertex: &V) -> &mut Self {
    if let Some(index) = self.position_of(vertex) {
      self.vertices.remove(index);
    }
    self
  }

  /// Remove `count` vertices starting at `start`. The range is cropped to the
  /// end of the hull, but `start` itself must name a vertex.
  pub fn remove_vertices(&mut self, start: usize, count: usize) -> Result<&mut Self, Error> {
    self.check_index(start)?;
    let end = start.saturating_add(count).min(self.vertices.len());
    self.vertices.drain(start..end);
    Ok(self)
  }

  /// Move a vertex so it lands just before the vertex that currently sits at
  /// `new_index`. Both indices are clamped to the hull, so this never fails.
  pub fn move_vertex(&mut self, old_index: usize, new_index: usize) -> &mut Self {
    let len = self.vertices.len();
    if len == 0 {
      return self;
    }
    let old_index = old_index.min(len - 1);
    let new_index = new_index.min(len);
    if old_index == new_index {
      return self;
    }
    let vertex = self.vertices.remove(old_index);
    let target = if new_index > old_index {
      new_index - 1
    } else {
      new_index
    };
    self.vertices.insert(target, vertex);
    self
  }

  /// [`move_vertex`](PolygonMeshBuilder::move_vertex) for the first vertex
  /// at the same position as `vertex`. Does nothing if there is none.
  pub fn move_vertex_value(&mut self, vertex: &V, new_index: usize) -> &mut Self {
    match self.position_of(vertex) {
      Some(old_index) => self.move_vertex(old_index, new_index),
      None => self,
    }
  }

  pub fn clear(&mut self) -> &mut Self {
    self.vertices.clear();
    self
  }

  /// Replace the hull with the vertices of an existing mesh.
  pub fn reset_to(&mut self, mesh: &PolygonMesh<V>) -> &mut Self {
    self.vertices.clear();
    self.vertices.extend(mesh.vertices.iter().cloned());
    self
  }

  /// Triangulate the hull.
  ///
  /// The hull is copied and reversed if needed so the mesh winds
  /// counter-clockwise; the builder's own vertex order is left alone.
  pub fn build(&mut self) -> Result<PolygonMesh<V>, Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let mut vertices = self.vertices.clone();
    if ensure_winding_order(&mut vertices, WindingOrder::CounterClockWise) {
      debug!("reversed a clockwise hull of {} vertices", vertices.len());
    }
    let triangulation = self
      .triangulator
      .triangulate(&vertices, WindingOrder::CounterClockWise)?;
    Ok(PolygonMesh {
      vertices,
      indices: triangulation.indices,
      bounds: triangulation.bounds,
    })
  }

  fn position_of(&self, vertex: &V) -> Option<usize> {
    let target = vertex.position();
    self.vertices.iter().position(|v| v.position() == target)
  }

  fn check_index(&self, index: usize) -> Result<(), Error> {
    if index < self.vertices.len() {
      Ok(())
    } else {
      Err(Error::IndexOutOfRange {
        index,
        len: self.vertices.len(),
      })
    }
  }

  fn check_insert(&self, index: usize) -> Result<(), Error> {
    if index <= self.vertices.len() {
      Ok(())
    } else {
      Err(Error::IndexOutOfRange {
        index,
        len: self.vertices.len(),
      })
    }
  }
}

impl<'a, V: PolygonVertex + Clone> IntoIterator for &'a PolygonMeshBuilder<V> {
  type Item = &'a V;
  type IntoIter = std::slice::Iter<'a, V>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
