/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::scanner_trait::*;
use crate::fixed::*;

///
/// A call received by a `ScanRecorder`
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    Start(Point),
    Line(Point),
}

///
/// A scanner that records the segments it receives rather than rendering them
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanRecorder {
    /// The events received since the last clear
    events: Vec<ScanEvent>,

    /// The smallest and largest coordinates seen since the last clear
    extent: Option<(Point, Point)>,

    /// Size set by the last call to set_bounds
    bounds: (i32, i32),

    /// Number of times draw() has been called
    draw_count: usize,
}

impl ScanRecorder {
    ///
    /// Creates a new, empty recorder
    ///
    pub fn new() -> ScanRecorder {
        ScanRecorder::default()
    }

    #[inline]
    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    ///
    /// The end points of every line that has been received, in order
    ///
    pub fn lines(&self) -> impl '_ + Iterator<Item = Point> {
        self.events.iter().filter_map(|event| match event {
            ScanEvent::Line(p) => Some(*p),
            ScanEvent::Start(_) => None,
        })
    }

    ///
    /// The bounding box (min, max) of all the points received since the last clear
    ///
    #[inline]
    pub fn path_extent(&self) -> Option<(Point, Point)> {
        self.extent
    }

    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        self.bounds
    }

    #[inline]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    fn include(&mut self, point: Point) {
        self.extent = Some(match self.extent {
            None => (point, point),
            Some((min, max)) => (
                Point::new(min.x.min(point.x), min.y.min(point.y)),
                Point::new(max.x.max(point.x), max.y.max(point.y)),
            ),
        });
    }
}

impl Scanner for ScanRecorder {
    fn start(&mut self, point: Point) {
        self.include(point);
        self.events.push(ScanEvent::Start(point));
    }

    fn line(&mut self, point: Point) {
        self.include(point);
        self.events.push(ScanEvent::Line(point));
    }

    fn draw(&mut self) {
        self.draw_count += 1;
    }

    fn clear(&mut self) {
        self.events.clear();
        self.extent = None;
    }

    fn set_bounds(&mut self, width: i32, height: i32) {
        self.bounds = (width, height);
    }
}
