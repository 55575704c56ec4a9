use super::Point2;

/// Area enclosed by a traced contour, in square pixels.
///
/// The contour is treated as closed. The sign follows the winding, so
/// callers comparing against an area threshold take the absolute value.
/// Fewer than three points enclose nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
