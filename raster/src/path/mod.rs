/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Describing paths
//!
//! ```
//! # use flo_raster::*;
//! #
//! let mut square = Path::new();
//! square.start(Point::from_f64(1.0, 1.0));
//! square.line(Point::from_f64(5.0, 1.0));
//! square.line(Point::from_f64(5.0, 5.0));
//! square.line(Point::from_f64(1.0, 5.0));
//! square.stop(true);
//!
//! let mut copy = Path::new();
//! square.add_to(&mut copy);
//!
//! assert!(copy == square);
//! assert!(square.to_string() == "M1.000,1.000 L5.000,1.000 L5.000,5.000 L1.000,5.000 Z");
//! ```
//!
//! The `Adder` trait is the protocol for describing a path: it's implemented by things that record paths
//! (such as `Path`) and by things that render them (such as `Filler`). A `Path` can replay itself into any
//! other `Adder`, so a path can be described once and then rendered many times.
//!

mod adder;
mod path;
mod path_command;
mod svg;

pub use self::adder::*;
pub use self::path::*;
pub use self::path_command::*;
