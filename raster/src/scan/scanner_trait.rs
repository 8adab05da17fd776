/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

///
/// Trait implemented by backends that accumulate line segments into anti-aliased pixel coverage
///
pub trait Scanner {
    ///
    /// Moves to the start of a new set of lines
    ///
    fn start(&mut self, point: Point);

    ///
    /// Adds a line from the last point to the specified point
    ///
    fn line(&mut self, point: Point);

    ///
    /// Renders the accumulated coverage
    ///
    fn draw(&mut self);

    ///
    /// Discards any accumulated lines
    ///
    fn clear(&mut self);

    ///
    /// Sets the size of the raster in pixels
    ///
    fn set_bounds(&mut self, width: i32, height: i32);
}
