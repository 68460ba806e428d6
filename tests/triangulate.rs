mod triangulate {
  use gorgon_triangulator::data::Bounds;
  use gorgon_triangulator::mesh::PolygonMeshBuilder;
  use gorgon_triangulator::*;

  use std::collections::BTreeSet;

  const SQUARE: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

  fn l_shape() -> Vec<[f32; 2]> {
    vec![
      [0.0, 0.0],
      [2.0, 0.0],
      [2.0, 1.0],
      [1.0, 1.0],
      [1.0, 2.0],
      [0.0, 2.0],
    ]
  }

  fn hexagon() -> Vec<[f64; 2]> {
    (0..6)
      .map(|i| {
        let angle = std::f64::consts::FRAC_PI_3 * f64::from(i);
        [angle.cos(), angle.sin()]
      })
      .collect()
  }

  // Triangles as sorted index triples, ignoring emission order and winding.
  fn triangle_set<T>(triangulation: &Triangulation<T>) -> BTreeSet<[usize; 3]> {
    triangulation
      .triangles()
      .map(|mut trig| {
        trig.sort_unstable();
        trig
      })
      .collect()
  }

  #[test]
  fn convex_triangle_counts() -> Result<(), Error> {
    let trig = [[0.0f32, 0.0], [4.0, 0.0], [0.0, 3.0]];
    assert_eq!(trig.triangulate(WindingOrder::CounterClockWise)?.triangle_count(), 1);
    assert_eq!(SQUARE.triangulate(WindingOrder::CounterClockWise)?.triangle_count(), 2);
    assert_eq!(hexagon().triangulate(WindingOrder::CounterClockWise)?.triangle_count(), 4);
    assert_eq!(l_shape().triangulate(WindingOrder::ClockWise)?.triangle_count(), 4);
    Ok(())
  }

  #[test]
  fn every_index_is_used() -> Result<(), Error> {
    let out = l_shape().triangulate(WindingOrder::CounterClockWise)?;
    let used: BTreeSet<usize> = out.indices.iter().copied().collect();
    assert_eq!(used, (0..6).collect());
    Ok(())
  }

  #[test]
  fn square_diagonal_split() -> Result<(), Error> {
    let out = SQUARE.triangulate(WindingOrder::CounterClockWise)?;
    assert_eq!(out.indices, vec![0, 1, 3, 1, 2, 3]);
    Ok(())
  }

  #[test]
  fn winding_round_trip() -> Result<(), Error> {
    for poly in [SQUARE.to_vec(), l_shape()] {
      let n = poly.len();
      let forward = poly.triangulate(WindingOrder::CounterClockWise)?;
      let mut reversed = poly.clone();
      reverse_winding_order(&mut reversed);
      let backward = reversed.triangulate(WindingOrder::ClockWise)?;
      // Index i of the reversed input is index n - 1 - i of the original.
      let remapped = Triangulation {
        indices: backward.indices.iter().map(|i| n - 1 - i).collect(),
        bounds: backward.bounds,
      };
      assert_eq!(triangle_set(&forward), triangle_set(&remapped));
    }
    Ok(())
  }

  #[test]
  fn convexity_classification() -> Result<(), Error> {
    let mut trig = Triangulator::new();
    trig.prepare(&SQUARE)?;
    assert_eq!(trig.convex_vertices().count(), 4);
    assert_eq!(trig.reflex_vertices().count(), 0);

    trig.prepare(&l_shape())?;
    let reflex: Vec<usize> = trig.reflex_vertices().map(|v| v.index).collect();
    assert_eq!(reflex, vec![3]);
    Ok(())
  }

  #[test]
  fn bounds_are_clamped_to_origin() -> Result<(), Error> {
    let trig = [[0.0f32, 0.0], [4.0, 0.0], [0.0, 3.0]];
    let out = trig.triangulate(WindingOrder::CounterClockWise)?;
    assert_eq!(out.bounds, Bounds::new(0.0, 0.0, 4.0, 3.0));

    // A polygon away from the origin still reports left/top of zero...
    let shifted = [[2.0f32, 5.0], [6.0, 5.0], [2.0, 8.0]];
    let out = shifted.triangulate(WindingOrder::CounterClockWise)?;
    assert_eq!(out.bounds, Bounds::new(0.0, 0.0, 6.0, 8.0));

    // ...unless exact bounds are requested.
    let mut exact = Triangulator::with_options(TriangulatorOptions::new().with_exact_bounds(true));
    let out = exact.triangulate(&shifted, WindingOrder::CounterClockWise)?;
    assert_eq!(out.bounds, Bounds::new(2.0, 5.0, 6.0, 8.0));
    assert_eq!(out.bounds.width(), 4.0);
    assert_eq!(out.bounds.height(), 3.0);
    Ok(())
  }

  #[test]
  fn homogeneous_vertices() -> Result<(), Error> {
    let quad = [
      [-1.0f32, -1.0, 0.5, 1.0],
      [1.0, -1.0, 0.5, 1.0],
      [1.0, 1.0, 0.5, 1.0],
      [-1.0, 1.0, 0.5, 1.0],
    ];
    let out = quad.triangulate(WindingOrder::ClockWise)?;
    assert_eq!(out.indices, vec![3, 1, 0, 3, 2, 1]);
    assert_eq!(out.bounds, Bounds::new(-1.0, -1.0, 1.0, 1.0));
    Ok(())
  }

  #[test]
  fn ensure_winding_twice_is_noop() {
    let mut poly = l_shape();
    reverse_winding_order(&mut poly);
    assert!(ensure_winding_order(&mut poly, WindingOrder::CounterClockWise));
    let once = poly.clone();
    assert!(!ensure_winding_order(&mut poly, WindingOrder::CounterClockWise));
    assert_eq!(poly, once);
    assert_eq!(poly, l_shape());
  }

  #[test]
  fn bowtie_terminates() -> Result<(), Error> {
    let bowtie = [[0.0f32, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
    let out = bowtie.triangulate(WindingOrder::CounterClockWise)?;
    assert!(out.triangle_count() <= 2);
    assert!(out.indices.iter().all(|&i| i < bowtie.len()));
    Ok(())
  }

  #[test]
  fn too_few_vertices() {
    let pair = [[0.0f32, 0.0], [1.0, 0.0]];
    assert_eq!(
      pair.triangulate(WindingOrder::CounterClockWise),
      Err(Error::InsufficientVertices)
    );
    assert_eq!(
      Error::InsufficientVertices.to_string(),
      "Insufficient vertices"
    );
  }

  #[test]
  fn reused_index_buffer() -> Result<(), Error> {
    let mut trig = Triangulator::new();
    let mut indices = vec![42; 100];
    trig.triangulate_into(&SQUARE, WindingOrder::CounterClockWise, &mut indices)?;
    assert_eq!(indices, vec![0, 1, 3, 1, 2, 3]);
    Ok(())
  }

  #[test]
  fn mesh_builder_round_trip() -> Result<(), Error> {
    let mut builder = PolygonMeshBuilder::new();
    builder.add_vertices(l_shape());
    builder.move_vertex(0, 6);
    let mesh = builder.build()?;
    assert_eq!(mesh.index_count(), 12);
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.bounds, Bounds::new(0.0, 0.0, 2.0, 2.0));
    Ok(())
  }
}
