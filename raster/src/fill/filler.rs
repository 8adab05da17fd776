/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::flattener::*;
use super::rasterizer_trait::*;
use super::split_scales::*;
use crate::error::*;
use crate::fixed::*;
use crate::path::*;
use crate::scan::*;

#[cfg(feature = "logging")]
use log::*;

use std::mem;

///
/// Rasterizer that fills paths by sending their outline as lines to a scanner
///
/// A filler can be reused for many paths: call `clear()` between them. Its flattening stacks are kept across
/// clears. Each subpath is closed with a line back to its start before the next one begins, whether or not
/// `stop(true)` is called, as an unclosed outline cannot be filled.
///
#[derive(Clone, Debug)]
pub struct Filler<TScanner: Scanner> {
    /// Where the lines are sent
    scanner: TScanner,

    /// Flattens the curves in the path
    flattener: Flattener,

    /// The point that the next segment starts from
    current: Point,

    /// The start of the current subpath
    first: Point,
}

///
/// Stops rendering when the flattener reports a precondition violation
///
fn expect_flattened(result: Result<(), RasterError>) {
    if let Err(err) = result {
        #[cfg(feature = "logging")]
        error!("Could not flatten curve: {}", err);

        panic!("{}", err);
    }
}

impl<TScanner: Scanner> Filler<TScanner> {
    ///
    /// Creates a filler for a raster of the specified size, which sends its output to a scanner
    ///
    pub fn new(width: i32, height: i32, scanner: TScanner) -> Filler<TScanner> {
        let mut filler = Filler {
            scanner,
            flattener: Flattener::new(),
            current: Point::ZERO,
            first: Point::ZERO,
        };

        filler.set_bounds(width, height);
        filler
    }

    ///
    /// Sets the size of the raster in pixels, which changes how finely curves are flattened
    ///
    /// Negative sizes are treated as 0.
    ///
    pub fn set_bounds(&mut self, width: i32, height: i32) {
        let (width, height) = (width.max(0), height.max(0));
        let split_scales = SplitScales::for_bounds(width, height);

        #[cfg(feature = "logging")]
        trace!("Filler bounds {}x{}: split scales {:?}", width, height, split_scales);

        self.flattener.set_split_scales(split_scales);
        self.scanner.set_bounds(width, height);
    }

    #[inline]
    pub fn split_scales(&self) -> SplitScales {
        self.flattener.split_scales()
    }

    ///
    /// The flattener used for the curves in the path (this can be used to pre-allocate its stacks)
    ///
    #[inline]
    pub fn flattener_mut(&mut self) -> &mut Flattener {
        &mut self.flattener
    }

    ///
    /// The point the next segment will start from
    ///
    #[inline]
    pub fn current_point(&self) -> Point {
        self.current
    }

    ///
    /// Asks the scanner to render what has been added so far
    ///
    pub fn draw(&mut self) {
        self.scanner.draw();
    }

    #[inline]
    pub fn scanner(&self) -> &TScanner {
        &self.scanner
    }

    #[inline]
    pub fn scanner_mut(&mut self) -> &mut TScanner {
        &mut self.scanner
    }

    pub fn into_scanner(self) -> TScanner {
        self.scanner
    }
}

impl<TScanner: Scanner> Adder for Filler<TScanner> {
    fn start(&mut self, point: Point) {
        if self.current != self.first {
            self.line(self.first);
        }

        self.current = point;
        self.first = point;
        self.scanner.start(point);
    }

    fn line(&mut self, point: Point) {
        self.current = point;
        self.scanner.line(point);
    }

    fn quad_bezier(&mut self, b: Point, c: Point) {
        let a = self.current;

        // The flattener is borrowed from self while self receives the lines
        let mut flattener = mem::take(&mut self.flattener);
        let result = flattener.quad_bezier(self, a, b, c);
        self.flattener = flattener;

        expect_flattened(result);
    }

    fn cube_bezier(&mut self, b: Point, c: Point, d: Point) {
        let a = self.current;

        let mut flattener = mem::take(&mut self.flattener);
        let result = flattener.cube_bezier(self, a, b, c, d);
        self.flattener = flattener;

        expect_flattened(result);
    }

    fn stop(&mut self, _close_loop: bool) {
        if self.current != self.first {
            self.line(self.first);
        }
    }

    fn clear(&mut self) {
        self.current = Point::ZERO;
        self.first = Point::ZERO;
        self.scanner.clear();
    }
}

impl<TScanner: Scanner> Rasterizer for Filler<TScanner> {
    #[inline]
    fn line_f(&mut self, point: Point) {
        self.line(point);
    }

    #[inline]
    fn join_f(&mut self) {}
}
