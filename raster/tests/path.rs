/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_raster::*;

///
/// The calls that can be made to an adder
///
#[derive(Copy, Clone, Debug, PartialEq)]
enum AdderCall {
    Start(Point),
    Line(Point),
    Quad(Point, Point),
    Cube(Point, Point, Point),
    Stop(bool),
    Clear,
}

///
/// Adder that records the calls made to it
///
#[derive(Default)]
struct CallLog(Vec<AdderCall>);

impl Adder for CallLog {
    fn start(&mut self, point: Point) {
        self.0.push(AdderCall::Start(point));
    }

    fn line(&mut self, point: Point) {
        self.0.push(AdderCall::Line(point));
    }

    fn quad_bezier(&mut self, b: Point, c: Point) {
        self.0.push(AdderCall::Quad(b, c));
    }

    fn cube_bezier(&mut self, b: Point, c: Point, d: Point) {
        self.0.push(AdderCall::Cube(b, c, d));
    }

    fn stop(&mut self, close_loop: bool) {
        self.0.push(AdderCall::Stop(close_loop));
    }

    fn clear(&mut self) {
        self.0.push(AdderCall::Clear);
    }
}

fn p(x: f64, y: f64) -> Point {
    Point::from_f64(x, y)
}

fn open_path() -> Path {
    let mut path = Path::new();

    path.start(p(1.0, 1.0));
    path.line(p(5.0, 1.0));
    path.quad_bezier(p(6.0, 3.0), p(5.0, 5.0));
    path.cube_bezier(p(4.0, 6.0), p(2.0, 6.0), p(1.0, 5.0));
    path.stop(false);

    path
}

fn closed_path() -> Path {
    let mut path = open_path();
    path.stop(true);

    path
}

#[test]
fn records_commands() {
    let path = closed_path();

    assert!(
        path.commands()
            == &[
                PathCommand::MoveTo(p(1.0, 1.0)),
                PathCommand::LineTo(p(5.0, 1.0)),
                PathCommand::QuadTo(p(6.0, 3.0), p(5.0, 5.0)),
                PathCommand::CubicTo(p(4.0, 6.0), p(2.0, 6.0), p(1.0, 5.0)),
                PathCommand::Close,
            ]
    );
}

#[test]
fn replay_open_path() {
    let mut log = CallLog::default();
    open_path().add_to(&mut log);

    assert!(
        log.0
            == vec![
                AdderCall::Start(p(1.0, 1.0)),
                AdderCall::Line(p(5.0, 1.0)),
                AdderCall::Quad(p(6.0, 3.0), p(5.0, 5.0)),
                AdderCall::Cube(p(4.0, 6.0), p(2.0, 6.0), p(1.0, 5.0)),
                AdderCall::Stop(false),
            ],
        "{:?}",
        log.0
    );
}

#[test]
fn replay_closed_path() {
    let mut log = CallLog::default();
    closed_path().add_to(&mut log);

    assert!(log.0.len() == 5);
    assert!(log.0.last() == Some(&AdderCall::Stop(true)));
}

#[test]
fn replay_closed_then_open_subpath() {
    let mut path = closed_path();
    path.start(p(10.0, 10.0));
    path.line(p(20.0, 10.0));

    let mut log = CallLog::default();
    path.add_to(&mut log);

    assert!(log.0[4] == AdderCall::Stop(true));
    assert!(log.0[5] == AdderCall::Start(p(10.0, 10.0)));
    assert!(log.0.last() == Some(&AdderCall::Stop(false)));
    assert!(log.0.len() == 8);
}

#[test]
fn replay_empty_path() {
    let mut log = CallLog::default();
    Path::new().add_to(&mut log);

    assert!(log.0 == vec![AdderCall::Stop(false)]);
}

#[test]
fn round_trip_open_path() {
    let path = open_path();
    let mut copy = Path::new();
    path.add_to(&mut copy);

    assert!(copy == path);
}

#[test]
fn round_trip_closed_path() {
    let path = closed_path();
    let mut copy = Path::new();
    path.add_to(&mut copy);

    assert!(copy == path);
}

#[test]
fn clear_path() {
    let mut path = closed_path();
    path.clear();

    assert!(path.is_empty());
    assert!(path.len() == 0);

    path.start(p(1.0, 1.0));
    assert!(path.commands() == &[PathCommand::MoveTo(p(1.0, 1.0))]);
}

#[test]
fn add_path() {
    let mut path = closed_path();
    let mut other = Path::new();
    other.start(p(10.0, 10.0));
    other.line(p(20.0, 20.0));

    path.add_path(&other);

    assert!(path.len() == 7);
    assert!(path.commands()[5] == PathCommand::MoveTo(p(10.0, 10.0)));
    assert!(path.validate().is_ok());
}

#[test]
fn svg_path_string() {
    let path = closed_path();

    assert!(
        path.to_svg_path() == "M1.000,1.000 L5.000,1.000 Q6.000,3.000,5.000,5.000 C4.000,6.000,2.000,6.000,1.000,5.000 Z",
        "{}",
        path.to_svg_path()
    );
    assert!(path.to_string() == path.to_svg_path());
}

#[test]
fn svg_path_fractions() {
    let mut path = Path::new();
    path.start(p(0.5, -0.25));

    assert!(path.to_svg_path() == "M0.500,-0.250");
}

#[test]
fn line_before_start_is_malformed() {
    let path = Path::from(vec![PathCommand::LineTo(p(1.0, 1.0))]);

    assert!(path.validate() == Err(RasterError::SegmentBeforeStart { index: 0 }));
}

#[test]
fn line_after_close_is_malformed() {
    let path = Path::from(vec![
        PathCommand::MoveTo(p(1.0, 1.0)),
        PathCommand::LineTo(p(2.0, 1.0)),
        PathCommand::Close,
        PathCommand::LineTo(p(2.0, 2.0)),
    ]);

    assert!(path.validate() == Err(RasterError::SegmentBeforeStart { index: 3 }));
}

#[test]
fn double_close_is_malformed() {
    let path = vec![PathCommand::MoveTo(p(1.0, 1.0)), PathCommand::Close, PathCommand::Close]
        .into_iter()
        .collect::<Path>();

    assert!(path.validate() == Err(RasterError::SegmentBeforeStart { index: 2 }));
}

#[test]
#[should_panic]
fn replaying_malformed_path_panics() {
    let path = Path::from(vec![PathCommand::QuadTo(p(1.0, 1.0), p(2.0, 2.0))]);
    let mut log = CallLog::default();

    path.add_to(&mut log);
}

#[test]
fn replay_into_dyn_adder() {
    let path = closed_path();
    let mut copy = Path::new();

    {
        let adder: &mut dyn Adder = &mut copy;
        path.add_to(adder);
    }

    assert!(copy == path);
}
