/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_raster
//!
//! `flo_raster` turns vector paths in 26.6 fixed-point coordinates into the stream of straight line
//! segments that an anti-aliasing scanline rasterizer consumes.
//!
//! ```
//! # use flo_raster::*;
//! #
//! let mut path = Path::new();
//! path.start(Point::from_f64(10.0, 10.0));
//! path.quad_bezier(Point::from_f64(50.0, 10.0), Point::from_f64(50.0, 50.0));
//! path.line(Point::from_f64(10.0, 50.0));
//! path.stop(true);
//!
//! let mut filler = Filler::new(64, 64, ScanRecorder::new());
//! path.add_to(&mut filler);
//! filler.draw();
//!
//! assert!(filler.scanner().lines().count() > 3);
//! ```
//!
//! Paths are described through the `Adder` trait. `Path` records the calls made to it and can replay
//! them into any other `Adder`, which is how a path is sent to a `Filler`. The `Filler` flattens
//! quadratic and cubic curves using fixed-point De Casteljau subdivision and passes the resulting lines
//! on to a `Scanner`, which is the coverage-accumulating backend (not part of this crate: `ScanRecorder`
//! is supplied as a backend that just remembers what it was sent).
//!
//! Consumers that transform the flattened geometry - stroking or dashing, for instance - implement
//! `Rasterizer` and drive a `Flattener` directly. They will generally also want the routines in the
//! `geo` module for building offset curves and joins.
//!

#[macro_use]
mod test_assert;

mod consts;
mod error;

pub mod fill;
pub mod fixed;
pub mod geo;
pub mod path;
pub mod scan;

pub use self::consts::*;
pub use self::error::*;
pub use self::fill::*;
pub use self::fixed::*;
pub use self::path::*;
pub use self::scan::*;
