/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

///
/// Trait implemented by types that can accumulate the segments of a path
///
/// Segments are always relative to the current point, which is the last point passed to any of these
/// functions.
///
pub trait Adder {
    ///
    /// Starts a new subpath at the specified point, ending any subpath that was in progress
    ///
    fn start(&mut self, point: Point);

    ///
    /// Adds a straight line from the current point
    ///
    fn line(&mut self, point: Point);

    ///
    /// Adds a quadratic bezier curve with the control point `b`, ending at `c`
    ///
    fn quad_bezier(&mut self, b: Point, c: Point);

    ///
    /// Adds a cubic bezier curve with the control points `b` and `c`, ending at `d`
    ///
    fn cube_bezier(&mut self, b: Point, c: Point, d: Point);

    ///
    /// Finishes the current subpath, closing it back to its start point if `close_loop` is true
    ///
    /// Implementations must accept a `stop(false)` for a subpath that has already been stopped.
    ///
    fn stop(&mut self, close_loop: bool);

    ///
    /// Discards everything added so far
    ///
    fn clear(&mut self);
}
