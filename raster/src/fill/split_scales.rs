/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

///
/// The scale factors that determine how finely curves are subdivided
///
/// The deviation of a curve from a straight line is divided by these values before the number of times to
/// split it is worked out, so larger values produce fewer lines.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SplitScales {
    /// Scale for the deviation of quadratic curves, and for the third-order deviation of cubic curves
    pub quadratic: i32,

    /// Scale for the second-order deviation of cubic curves
    pub cubic: i32,
}

impl SplitScales {
    ///
    /// Chooses the split scales for a raster of the specified size in pixels
    ///
    /// Small rasters tolerate more error than large ones, so curves are split less often for them.
    ///
    pub fn for_bounds(width: i32, height: i32) -> SplitScales {
        let (width, height) = (width.max(0), height.max(0));

        let (quadratic, cubic) = if width <= SMALL_RASTER_SIZE && height <= SMALL_RASTER_SIZE {
            (128, 64)
        } else if width <= MEDIUM_RASTER_SIZE && height <= MEDIUM_RASTER_SIZE {
            (64, 32)
        } else {
            (32, 16)
        };

        SplitScales { quadratic, cubic }
    }

    ///
    /// Returns a copy of these scales where neither value is less than 1
    ///
    #[inline]
    pub fn clamped(self) -> SplitScales {
        SplitScales {
            quadratic: self.quadratic.max(1),
            cubic: self.cubic.max(1),
        }
    }
}

impl Default for SplitScales {
    fn default() -> SplitScales {
        SplitScales::for_bounds(0, 0)
    }
}
