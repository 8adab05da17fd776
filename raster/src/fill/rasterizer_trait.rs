/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;
use crate::path::*;

///
/// Trait implemented by types that receive the output of a `Flattener`
///
/// Curves that are really straight lines are sent to `Adder::line()`. Other curves call `join_f()` once,
/// followed by `line_f()` for each of the lines that approximate them.
///
pub trait Rasterizer: Adder {
    ///
    /// Receives a line generated while flattening a curve
    ///
    fn line_f(&mut self, point: Point);

    ///
    /// Called before the lines for a curve are generated, so that a join can be added at its start
    ///
    fn join_f(&mut self);
}
