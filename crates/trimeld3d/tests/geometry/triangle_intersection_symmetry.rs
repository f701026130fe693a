use trimeld3d::math::{IntPoint, IntVector};
use trimeld3d::shape::HalfEdgeMesh;
use trimeld3d::transformation::{intersect, IntersectionType};

fn random_point(rng: &mut oorandom::Rand32) -> IntPoint {
    let mut coord = || rng.rand_range(0..4001) as i32 - 2000;
    IntPoint::new(coord(), coord(), coord())
}

fn is_degenerate(a: &IntPoint, b: &IntPoint, c: &IntPoint) -> bool {
    let ab: IntVector = b - a;
    let ac: IntVector = c - a;
    let ab = ab.cast::<f64>();
    let ac = ac.cast::<f64>();
    ab.cross(&ac).norm() < 1.0e4
}

#[test]
fn intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_segments = 0;

    for _ in 0..500 {
        let vertices: Vec<_> = (0..6).map(|_| random_point(&mut rng)).collect();
        if is_degenerate(&vertices[0], &vertices[1], &vertices[2])
            || is_degenerate(&vertices[3], &vertices[4], &vertices[5])
        {
            continue;
        }

        let mesh = HalfEdgeMesh::from_buffers(vertices, vec![[0, 1, 2], [3, 4, 5]]).unwrap();
        let forward = intersect(mesh.face(0), mesh.face(1), None);
        let backward = intersect(mesh.face(1), mesh.face(0), None);

        assert_eq!(
            forward.intersection_type(),
            backward.intersection_type(),
            "{:?} vs. {:?}",
            mesh.face(0),
            mesh.face(1)
        );

        if forward.intersection_type() == IntersectionType::LineSegment {
            num_segments += 1;
            let (from, to) = forward.segment().unwrap();
            let (back_from, back_to) = backward.segment().unwrap();
            assert_eq!(from.location(), back_to.location());
            assert_eq!(to.location(), back_from.location());
        } else {
            assert_eq!(backward.segment(), None);
        }
    }

    assert!(num_segments > 0);
}
