/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::fixed::*;

///
/// Finds the points where two circles intersect
///
/// Returns `None` if the circles are too far apart to touch, or if one is entirely inside the other. Circles that
/// just touch produce the same point twice.
///
pub fn circle_circle_intersection(center1: Point, center2: Point, radius1: Fixed, radius2: Fixed) -> Option<(Point, Point)> {
    let dc = center2 - center1;
    let d = dc.length();

    if d > radius1 + radius2 {
        // Too far apart
        return None;
    }

    if d < (radius1 - radius2).abs() {
        // One circle contains the other
        return None;
    }

    if d == Fixed::ZERO {
        // Concentric circles have no distinct intersection points
        return None;
    }

    let (r1, r2, df) = (radius1.0 as f64, radius2.0 as f64, d.0 as f64);
    let along = (r1 * r1 - r2 * r2 + df * df) / df / 2.0;
    let height = (r1 * r1 - along * along).max(0.0).sqrt() / df;
    let along = along / df;

    let (offset_x, offset_y) = (-dc.y.0 as f64 * height, dc.x.0 as f64 * height);
    let mid_x = center1.x.0 as f64 + dc.x.0 as f64 * along;
    let mid_y = center1.y.0 as f64 + dc.y.0 as f64 * along;

    let p1 = Point::from_raw((mid_x + offset_x) as i32, (mid_y + offset_y) as i32);
    let p2 = Point::from_raw((mid_x - offset_x) as i32, (mid_y - offset_y) as i32);

    Some((p1, p2))
}

///
/// Finds where the infinite line through `a1` and `a2` crosses the infinite line through `b1` and `b2`
///
/// Parallel lines (including lines where one of the pairs of points is identical) have no single intersection,
/// and produce `RasterError::ParallelLines`. Callers are expected to rule this case out beforehand.
///
pub fn calc_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Result<Point, RasterError> {
    let da = a2 - a1;
    let db = b2 - b1;
    let ds = a1 - b1;

    let det = da.cross(db).0;
    if det == 0 {
        return Err(RasterError::ParallelLines);
    }

    let t = -(ds.cross(db).0 as f64) / det as f64;
    let offset = Point::from_raw((da.x.0 as f64 * t) as i32, (da.y.0 as f64 * t) as i32);

    Ok(a1 + offset)
}

///
/// Finds where a ray meets a circle. The ray starts at `s2` and heads away from `s1` (ie, it extends the line
/// from `s1` to `s2` beyond `s2`).
///
/// When the ray crosses the circle twice, the crossing closest to `s2` is returned. Returns `None` if the ray
/// misses or only touches the circle, if both crossings are behind `s2`, or if `s1` and `s2` are the same point.
///
pub fn ray_circle_intersection(s1: Point, s2: Point, center: Point, radius: Fixed) -> Option<Point> {
    let (n, m) = ((s2.x.0 - center.x.0) as f64, (s2.y.0 - center.y.0) as f64);
    let (e, d) = ((s2.x.0 - s1.x.0) as f64, (s2.y.0 - s1.y.0) as f64);
    let r = radius.0 as f64;

    // Coefficients of the quadratic in t for the point s2 + t*(s2 - s1)
    let a = e * e + d * d;
    let b = 2.0 * (e * n + d * m);
    let c = n * n + m * m - r * r;

    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        // Missed, or tangent
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (2.0 * a);
    let far = (-b + root) / (2.0 * a);

    let t = if near > 0.0 {
        near
    } else if far > 0.0 {
        far
    } else {
        // The line crosses the circle, but only behind the start of the ray
        return None;
    };

    Some(Point::from_raw((n + e * t) as i32 + center.x.0, (m + d * t) as i32 + center.y.0))
}
