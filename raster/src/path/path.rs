/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::adder::*;
use super::path_command::*;
use crate::error::*;
use crate::fixed::*;

#[cfg(feature = "logging")]
use log::*;

///
/// A path, stored as the sequence of commands used to describe it
///
/// A well-formed path begins with `MoveTo`, and any `Close` is the last command of its subpath. Clearing a path
/// keeps its storage so it can be cheaply reused.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    pub fn new() -> Path {
        Path { commands: vec![] }
    }

    ///
    /// The commands that make up this path
    ///
    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    ///
    /// Appends the commands from another path to the end of this one
    ///
    pub fn add_path(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    ///
    /// Checks that every drawing command in this path belongs to an open subpath
    ///
    /// A subpath is opened by `MoveTo` and ends at the next `MoveTo` or `Close`: anything that draws (or closes)
    /// while no subpath is open makes the path malformed.
    ///
    pub fn validate(&self) -> Result<(), RasterError> {
        let mut open = false;

        for (index, command) in self.commands.iter().enumerate() {
            match command {
                PathCommand::MoveTo(_) => {
                    open = true;
                }

                PathCommand::Close => {
                    if !open {
                        return Err(RasterError::SegmentBeforeStart { index });
                    }
                    open = false;
                }

                _ => {
                    if !open {
                        return Err(RasterError::SegmentBeforeStart { index });
                    }
                }
            }
        }

        Ok(())
    }

    ///
    /// Replays this path into an adder
    ///
    /// Each command becomes the matching call, a `Close` becomes `stop(true)`, and if the path does not end with a
    /// `Close` a final `stop(false)` is sent.
    ///
    /// Panics if the path fails `validate()`: such a path can only be produced by a bug in the
    /// code that built it.
    ///
    pub fn add_to<TAdder: Adder + ?Sized>(&self, adder: &mut TAdder) {
        if let Err(err) = self.validate() {
            #[cfg(feature = "logging")]
            error!("Refusing to replay malformed path: {}", err);

            panic!("{}", err);
        }

        for command in self.commands.iter() {
            match command {
                PathCommand::MoveTo(a) => adder.start(*a),
                PathCommand::LineTo(b) => adder.line(*b),
                PathCommand::QuadTo(b, c) => adder.quad_bezier(*b, *c),
                PathCommand::CubicTo(b, c, d) => adder.cube_bezier(*b, *c, *d),
                PathCommand::Close => adder.stop(true),
            }
        }

        if self.commands.last() != Some(&PathCommand::Close) {
            adder.stop(false);
        }
    }
}

impl Adder for Path {
    fn start(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    fn line(&mut self, point: Point) {
        test_assert!(!self.commands.is_empty());
        self.commands.push(PathCommand::LineTo(point));
    }

    fn quad_bezier(&mut self, b: Point, c: Point) {
        test_assert!(!self.commands.is_empty());
        self.commands.push(PathCommand::QuadTo(b, c));
    }

    fn cube_bezier(&mut self, b: Point, c: Point, d: Point) {
        test_assert!(!self.commands.is_empty());
        self.commands.push(PathCommand::CubicTo(b, c, d));
    }

    fn stop(&mut self, close_loop: bool) {
        if close_loop {
            self.commands.push(PathCommand::Close);
        }
    }

    fn clear(&mut self) {
        self.commands.clear();
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Path {
        Path { commands }
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<TIter: IntoIterator<Item = PathCommand>>(iter: TIter) -> Path {
        Path { commands: iter.into_iter().collect() }
    }
}
