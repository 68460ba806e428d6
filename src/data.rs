mod bounds;
pub(crate) mod point;
mod triangle;
mod vector;
mod vertex;
mod vertex_list;

pub use bounds::Bounds;
pub use point::Point;
pub use triangle::Triangle;
pub use vector::Vector;
pub use vertex::{PolygonVertex, Vertex};
pub use vertex_list::{Slot, VertexList};
