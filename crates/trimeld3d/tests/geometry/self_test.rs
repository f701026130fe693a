use trimeld3d::math::IntPoint;
use trimeld3d::shape::HalfEdgeMesh;
use trimeld3d::transformation::{intersect, self_test, IntersectionPointType, IntersectionType};
use trimeld3d::utils::IntVectorOps;

#[test]
fn self_test_succeeds() {
    assert_eq!(self_test(), Ok(()));
}

// Triangle A lies on z = 0 and triangle B crosses it along x = 50000.
#[test]
fn smoke_scenario_crosses_along_half_plane() {
    let vertices = vec![
        IntPoint::new(0, 0, 0),
        IntPoint::new(100_000, 100_000, 0),
        IntPoint::new(100_000, 0, 0),
        IntPoint::new(0, 0, -1_000),
        IntPoint::new(100_000, 100_000, 1_000),
        IntPoint::new(100_000, 0, 1_000),
    ];
    let mesh = HalfEdgeMesh::from_buffers(vertices, vec![[0, 1, 2], [3, 4, 5]]).unwrap();

    let intersection = intersect(mesh.face(0), mesh.face(1), None);
    assert_eq!(intersection.intersection_type(), IntersectionType::LineSegment);

    let (from, to) = intersection.segment().unwrap();
    assert_eq!(from.point_type(), IntersectionPointType::New);
    assert_eq!(to.point_type(), IntersectionPointType::New);
    assert_eq!(from.location().z, 0);
    assert_eq!(to.location().z, 0);
    assert!((from.location() - IntPoint::new(50_000, 50_000, 0)).test_length(1));
    assert!((to.location() - IntPoint::new(50_000, 0, 0)).test_length(1));

    assert!(!intersection.inner_direction_1());
    assert!(intersection.inner_direction_2());
    assert_eq!(intersection.touches_edge_1(), None);
    assert_eq!(intersection.touches_edge_2(), None);
}
