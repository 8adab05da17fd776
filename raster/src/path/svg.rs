/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use super::path_command::*;

use itertools::Itertools;

use std::fmt;

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(a) => write!(f, "M{}", a),
            PathCommand::LineTo(b) => write!(f, "L{}", b),
            PathCommand::QuadTo(b, c) => write!(f, "Q{},{}", b, c),
            PathCommand::CubicTo(b, c, d) => write!(f, "C{},{},{}", b, c, d),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

impl Path {
    ///
    /// Describes this path in a format similar to SVG path data: `M`, `L`, `Q`, `C` and `Z` commands, with
    /// coordinates to 3 decimal places, separated by spaces
    ///
    /// This is intended for debugging and is not guaranteed to be stable.
    ///
    pub fn to_svg_path(&self) -> String {
        self.commands().iter().join(" ")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_path())
    }
}
