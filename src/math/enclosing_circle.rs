use super::distance_2d::distance;
use super::{Point2, TOLERANCE};

/// Slack used when testing whether a point already lies inside a circle.
const CONTAIN_EPS: f64 = 1e-7;

/// Computes the smallest circle enclosing every point.
///
/// Incremental Welzl construction: each point outside the running circle
/// becomes a boundary point of the next one. Points are visited in a
/// strided order so that traced contours, which arrive sorted along the
/// boundary, do not hit the cubic worst case. Returns `(center, radius)`,
/// or `None` for an empty slice.
#[must_use]
pub fn min_enclosing_circle(points: &[Point2]) -> Option<(Point2, f64)> {
    let points = strided(points);
    let first = *points.first()?;
    let mut center = first;
    let mut radius = 0.0;

    for i in 1..points.len() {
        if contains(&center, radius, &points[i]) {
            continue;
        }
        center = points[i];
        radius = 0.0;
        for j in 0..i {
            if contains(&center, radius, &points[j]) {
                continue;
            }
            center = nalgebra::center(&points[i], &points[j]);
            radius = distance(&points[i], &points[j]) * 0.5;
            for k in 0..j {
                if contains(&center, radius, &points[k]) {
                    continue;
                }
                (center, radius) = circle_through(&points[i], &points[j], &points[k]);
            }
        }
    }

    Some((center, radius))
}

/// Reorders `points` by visiting indices `0, s, 2s, ...` modulo `n` with a
/// stride `s` coprime to `n`.
fn strided(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    if n < 4 {
        return points.to_vec();
    }
    let mut stride = n * 5 / 8;
    while gcd(stride, n) != 1 {
        stride += 1;
    }
    (0..n).map(|i| points[(i * stride) % n]).collect()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn contains(center: &Point2, radius: f64, p: &Point2) -> bool {
    distance(center, p) <= radius + CONTAIN_EPS
}

/// Circumscribed circle of three points; falls back to the circle on the
/// farthest pair when the points are collinear.
fn circle_through(a: &Point2, b: &Point2, c: &Point2) -> (Point2, f64) {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < TOLERANCE {
        let pairs = [(a, b), (b, c), (a, c)];
        let (p, q) = pairs
            .into_iter()
            .max_by(|(p0, q0), (p1, q1)| distance(p0, q0).total_cmp(&distance(p1, q1)))
            .unwrap_or((a, b));
        return (nalgebra::center(p, q), distance(p, q) * 0.5);
    }

    let a2 = a.coords.norm_squared();
    let b2 = b.coords.norm_squared();
    let c2 = c.coords.norm_squared();
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    let center = Point2::new(ux, uy);
    (center, distance(&center, a))
}
