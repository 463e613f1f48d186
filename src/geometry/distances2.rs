use itertools::Itertools;
use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Return the length of the open polyline through the points, in order
pub fn path_length(points: &[Point2<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| dist(a, b))
        .sum()
}

/// Return the length of the polyline through the points including the segment from the last
/// point back to the first
pub fn closed_length(points: &[Point2<f64>]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => path_length(points) + dist(last, first),
        _ => 0.0,
    }
}
