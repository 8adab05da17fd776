/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

///
/// A single record in an encoded path
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// Starts a new subpath
    MoveTo(Point),

    /// Straight line to a point
    LineTo(Point),

    /// Quadratic bezier curve (control point, end point)
    QuadTo(Point, Point),

    /// Cubic bezier curve (first control point, second control point, end point)
    CubicTo(Point, Point, Point),

    /// Closes the subpath back to its start point
    Close,
}
