/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Precondition violations detected while rasterizing
///
/// These indicate a bug in the caller (a path with coordinates far outside the expected range, or
/// a request that the caller was supposed to rule out), so they should never be retried.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum RasterError {
    /// A curve would need to be halved more times than the flattener supports
    SplitDepthExceeded { depth: usize },

    /// Two lines with no single intersection point were passed to `calc_intersect`
    ParallelLines,

    /// An encoded path draws a segment (or closes) before any subpath is started
    SegmentBeforeStart { index: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::SplitDepthExceeded { depth } => write!(f, "curve split depth too large: {}", depth),
            RasterError::ParallelLines => write!(f, "cannot intersect parallel lines"),
            RasterError::SegmentBeforeStart { index } => write!(f, "bad path: record {} appears before the first move", index),
        }
    }
}

impl Error for RasterError {}
