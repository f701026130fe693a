mod self_test;
mod triangle_intersection_segment;
mod triangle_intersection_symmetry;
