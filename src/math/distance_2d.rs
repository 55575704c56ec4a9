use super::Point2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (a - b).norm()
}

/// Returns the arithmetic mean of `points`, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<'a, I>(points: I) -> Option<Point2>
where
    I: IntoIterator<Item = &'a Point2>,
{
    let mut sum = Point2::origin().coords;
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    (count > 0).then(|| Point2::from(sum / count as f64))
}

/// Keeps the points lying strictly within `tolerance` of the centroid of
/// all points, preserving input order.
///
/// `center_of` projects each item to the point that is tested.
pub fn retain_near_centroid<T, F>(items: Vec<T>, tolerance: f64, center_of: F) -> Vec<T>
where
    F: Fn(&T) -> Point2,
{
    let centers: Vec<Point2> = items.iter().map(&center_of).collect();
    let Some(mean) = centroid(&centers) else {
        return Vec::new();
    };
    items
        .into_iter()
        .zip(centers)
        .filter_map(|(item, c)| (distance(&c, &mean) < tolerance).then_some(item))
        .collect()
}
