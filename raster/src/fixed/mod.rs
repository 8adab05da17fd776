/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Fixed-point numbers and points
//!
//! Coordinates are stored as `Fixed` values, which are signed 26.6 fixed-point numbers: the raw value is
//! the coordinate multiplied by 64. Products of two `Fixed` values are kept in a `WideFixed` (52.12) so
//! that no precision is lost before they are scaled back down.
//!
//! The Y axis grows downwards, as is usual for raster coordinates.
//!

mod fixed;
mod point;
mod wide_fixed;

pub use self::fixed::*;
pub use self::point::*;
pub use self::wide_fixed::*;
