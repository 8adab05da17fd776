/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Number of fractional bits in a `Fixed` value
pub const FIXED_SHIFT: u32 = 6;

/// Number of fractional bits in a `WideFixed` value
pub const WIDE_FIXED_SHIFT: u32 = 12;

/// The value of 1.0 as a raw `Fixed` value
pub const FIXED_ONE: i32 = 1 << FIXED_SHIFT;

/// The largest number of times a single curve can be halved while it is being flattened
pub const MAX_SPLIT_DEPTH: usize = 16;

/// Rasters with both sides no larger than this many pixels use the coarsest split scale
pub const SMALL_RASTER_SIZE: i32 = 24;

/// Rasters with both sides no larger than this many pixels use the intermediate split scale
pub const MEDIUM_RASTER_SIZE: i32 = 120;
