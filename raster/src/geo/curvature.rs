/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::fixed::*;

///
/// Computes the signed radius of curvature at the end point `p1` of a bezier curve, given the two
/// neighbouring points `p0` and `p2` and a scale factor (which depends on the degree of the curve)
///
/// The result is 0 when the three points are collinear. The sign indicates which side of the curve the
/// center of the osculating circle is on: positive when the curve turns counter-clockwise on screen at `p1`
/// (the center is to the left when travelling forwards), negative when it turns clockwise.
///
pub fn rad_curvature(p0: Point, p1: Point, p2: Point, scale_factor: WideFixed) -> Fixed {
    let a = p2 - p1;
    let b = p1 - p0;

    let turn = a.cross(b).0;
    if b == Point::ZERO || turn == 0 {
        // No incoming direction, or the points are collinear
        return Fixed::ZERO;
    }

    // h is the rejection of a from b
    let h = a.rejection(b);
    if h == Point::ZERO {
        return Fixed::ZERO;
    }

    let len_h = (h.length().0 as i64) << FIXED_SHIFT;
    let rad_curve = Fixed(((a.dot(a).0 * scale_factor.0 / len_h) >> FIXED_SHIFT) as i32);

    if turn > 0 {
        rad_curve
    } else {
        -rad_curve
    }
}
