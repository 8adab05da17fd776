/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Scan-conversion backends
//!
//! A `Scanner` receives the straight-line segments produced by a `Filler` and turns them into pixel
//! coverage. How that is done (and which winding rule is used) is entirely up to the backend.
//!
//! `ScanRecorder` is a backend that produces no pixels: it just remembers the segments it was sent, which
//! is useful for testing and for callers that want the flattened polyline itself.
//!

mod scan_recorder;
mod scanner_trait;

pub use self::scan_recorder::*;
pub use self::scanner_trait::*;
