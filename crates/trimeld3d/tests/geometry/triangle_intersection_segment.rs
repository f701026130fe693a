use trimeld3d::math::{IntPoint, Point};
use trimeld3d::shape::HalfEdgeMesh;
use trimeld3d::transformation::{
    intersect, intersect_with_tolerances, IntersectionPoint, IntersectionTolerances,
    IntersectionType,
};

fn flat_and_vertical(y: i32) -> HalfEdgeMesh {
    // The first triangle lies on z = 0, the second one on y = `y`.
    let vertices = vec![
        IntPoint::new(0, 0, 0),
        IntPoint::new(1000, 0, 0),
        IntPoint::new(0, 1000, 0),
        IntPoint::new(-500, y, -500),
        IntPoint::new(500, y, -500),
        IntPoint::new(0, y, 500),
    ];
    HalfEdgeMesh::from_buffers(vertices, vec![[0, 1, 2], [3, 4, 5]]).unwrap()
}

#[test]
fn overlapping_crossings() {
    let mesh = flat_and_vertical(100);
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    let intersection = intersect(face1, face2, None);
    assert_eq!(
        intersection.intersection_type(),
        IntersectionType::LineSegment
    );
    assert_eq!(
        intersection.from(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(0, 100, 0),
            edge: face1.edge(2),
        })
    );
    assert_eq!(
        intersection.to(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(250, 100, 0),
            edge: face2.edge(1),
        })
    );
    assert!(!intersection.inner_direction_1());
    assert!(intersection.inner_direction_2());
    assert_eq!(intersection.touches_edge_1(), None);
    assert_eq!(intersection.touches_edge_2(), None);
}

#[test]
fn swapped_arguments_reverse_the_segment() {
    let mesh = flat_and_vertical(100);
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    let forward = intersect(face1, face2, None);
    let backward = intersect(face2, face1, None);

    assert_eq!(
        backward.intersection_type(),
        IntersectionType::LineSegment
    );
    assert_eq!(backward.from(), forward.to());
    assert_eq!(backward.to(), forward.from());
    assert!(!backward.inner_direction_1());
    assert!(backward.inner_direction_2());
}

#[test]
fn endpoint_close_to_vertex_is_melded() {
    let mesh = flat_and_vertical(10);
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    let intersection = intersect(face1, face2, None);
    assert_eq!(
        intersection.from(),
        Some(IntersectionPoint::Vertex(face1.vertex(0)))
    );
    assert_eq!(
        intersection.to(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(250, 10, 0),
            edge: face2.edge(1),
        })
    );

    // Without melding, the computed point is kept.
    let tolerances = IntersectionTolerances { meld_distance: 0 };
    let unmelded = intersect_with_tolerances(face1, face2, None, tolerances);
    assert_eq!(
        unmelded.from(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(0, 10, 0),
            edge: face1.edge(2),
        })
    );
    assert_eq!(unmelded.to(), intersection.to());
}

#[test]
fn edge_lying_on_the_other_plane() {
    let vertices = vec![
        IntPoint::new(0, 0, 0),
        IntPoint::new(1000, 0, 0),
        IntPoint::new(0, 1000, 0),
        IntPoint::new(100, 100, 0),
        IntPoint::new(300, 100, 0),
        IntPoint::new(200, 100, 500),
    ];
    let mesh = HalfEdgeMesh::from_buffers(vertices, vec![[0, 1, 2], [3, 4, 5]]).unwrap();
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    let intersection = intersect(face1, face2, None);
    assert_eq!(
        intersection.intersection_type(),
        IntersectionType::LineSegment
    );
    assert_eq!(
        intersection.segment(),
        Some((
            IntersectionPoint::Vertex(mesh.vertex(3)),
            IntersectionPoint::Vertex(mesh.vertex(4))
        ))
    );
    assert_eq!(intersection.touches_edge_1(), None);
    assert_eq!(intersection.touches_edge_2(), Some(face2.edge(0)));
    assert!(!intersection.inner_direction_1());
    assert!(!intersection.inner_direction_2());
}

#[test]
fn hint_on_intersection_line() {
    let mesh = flat_and_vertical(100);
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    let expected = intersect(face1, face2, None);
    let hint = Point::new(123.0, 100.0, 0.0);
    assert_eq!(intersect(face1, face2, Some(hint)), expected);
}

#[test]
fn short_segment_between_new_points_is_kept() {
    let vertices = vec![
        IntPoint::new(0, 0, 0),
        IntPoint::new(1000, 0, 0),
        IntPoint::new(0, 1000, 0),
        IntPoint::new(890, 100, -500),
        IntPoint::new(1300, 100, -500),
        IntPoint::new(890, 100, 500),
    ];
    let mesh = HalfEdgeMesh::from_buffers(vertices, vec![[0, 1, 2], [3, 4, 5]]).unwrap();
    let face1 = mesh.face(0);
    let face2 = mesh.face(1);

    // Both endpoints are 10 units apart, under the meld distance, but neither is a vertex.
    let intersection = intersect(face1, face2, None);
    assert_eq!(
        intersection.intersection_type(),
        IntersectionType::LineSegment
    );
    assert_eq!(
        intersection.from(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(890, 100, 0),
            edge: face2.edge(2),
        })
    );
    assert_eq!(
        intersection.to(),
        Some(IntersectionPoint::New {
            location: IntPoint::new(900, 100, 0),
            edge: face1.edge(1),
        })
    );
}
