/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

///
/// Picks whichever of `p1` or `p2` is on the port side of the line heading from `stern` towards `bow`,
/// preferring the one closest to the line when both are
///
/// The port side is the side where the cross product of the heading and the vector from the stern to the
/// point is non-negative. Returns `None` if neither point qualifies, or immediately if `is_intersecting` is
/// false (which lets the result of an intersection routine be passed straight through).
///
/// If `bow` and `stern` are the same point, both candidates are on the port side and the one closest to the
/// stern is returned.
///
pub fn closest_portside(bow: Point, stern: Point, p1: Point, p2: Point, is_intersecting: bool) -> Option<Point> {
    if !is_intersecting {
        return None;
    }

    let dir = bow - stern;
    let dp1 = p1 - stern;
    let dp2 = p2 - stern;
    let cp1 = dir.cross(dp1).0;
    let cp2 = dir.cross(dp2).0;

    match (cp1 >= 0, cp2 >= 0) {
        (false, false) => None,
        (false, true) => Some(p2),
        (true, false) => Some(p1),

        (true, true) => {
            // Both on the port side: use the point with the smallest rejection from the heading
            let h1 = dp1.rejection(dir);
            let h2 = dp2.rejection(dir);

            if h1.dot(h1) > h2.dot(h2) {
                Some(p2)
            } else {
                Some(p1)
            }
        }
    }
}
