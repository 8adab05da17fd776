/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Flattening curves into lines
//!
//! The `Flattener` approximates quadratic and cubic bezier curves with straight lines. The number of lines
//! is worked out up front from how far the control points deviate from a straight line, and the curve is
//! then repeatedly halved (using De Casteljau subdivision in fixed-point) until each piece is flat enough to
//! be replaced by two lines.
//!
//! The lines are sent to a `Rasterizer`, which is any `Adder` that also provides the `line_f()` and `join_f()`
//! hooks. The `Filler` is the rasterizer for filling shapes: it sends the lines straight to a `Scanner`.
//! A stroking or dashing rasterizer can instead own its own `Flattener`, pass itself in as the target, and
//! offset the lines as it receives them.
//!

mod filler;
mod flattener;
mod rasterizer_trait;
mod split_scales;

pub use self::filler::*;
pub use self::flattener::*;
pub use self::rasterizer_trait::*;
pub use self::split_scales::*;
