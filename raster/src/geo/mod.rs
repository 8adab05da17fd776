/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Fixed-point geometry
//!
//! Vector algebra on `Point`s plus the solvers needed to build offset curves and joins: line/line,
//! circle/circle and ray/circle intersections, the curvature at the end of a curve and a way to choose
//! between two candidate intersections by which side of a line they are on.
//!
//! Intersections that may not exist return an `Option`. The one exception is `calc_intersect`, where
//! parallel lines are considered to be a bug in the caller and are reported as a `RasterError`.
//!
//! ```
//! # use flo_raster::*;
//! # use flo_raster::geo::*;
//! #
//! let center1 = Point::from_f64(0.0, 0.0);
//! let center2 = Point::from_f64(10.0, 0.0);
//!
//! let (p1, p2) = circle_circle_intersection(center1, center2, Fixed::from_int(10), Fixed::from_int(10)).unwrap();
//! assert!(p1.x == Fixed::from_int(5) && p2.x == Fixed::from_int(5));
//! assert!(p1.y == -p2.y);
//! ```
//!

mod curvature;
mod intersection;
mod portside;
mod vector;

pub use self::curvature::*;
pub use self::intersection::*;
pub use self::portside::*;
