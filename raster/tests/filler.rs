/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_raster::*;

fn p(x: f64, y: f64) -> Point {
    Point::from_f64(x, y)
}

///
/// A circle of radius 100 centered on 100, 100, made from four quadratic curves
///
fn circle() -> Path {
    let mut path = Path::new();

    path.start(p(200.0, 100.0));
    path.quad_bezier(p(200.0, 200.0), p(100.0, 200.0));
    path.quad_bezier(p(0.0, 200.0), p(0.0, 100.0));
    path.quad_bezier(p(0.0, 0.0), p(100.0, 0.0));
    path.quad_bezier(p(200.0, 0.0), p(200.0, 100.0));
    path.stop(true);

    path
}

#[test]
fn larger_rasters_get_more_lines() {
    let mut small = Filler::new(20, 20, ScanRecorder::new());
    let mut large = Filler::new(500, 500, ScanRecorder::new());

    circle().add_to(&mut small);
    circle().add_to(&mut large);

    let small_lines = small.scanner().lines().count();
    let large_lines = large.scanner().lines().count();

    assert!(small_lines == 64, "{}", small_lines);
    assert!(large_lines == 128, "{}", large_lines);
    assert!(small_lines * 3 / 2 < large_lines);
}

#[test]
fn flattened_circle_ends_where_it_started() {
    let mut filler = Filler::new(256, 256, ScanRecorder::new());
    circle().add_to(&mut filler);

    assert!(filler.scanner().events()[0] == ScanEvent::Start(p(200.0, 100.0)));
    assert!(filler.scanner().lines().last() == Some(p(200.0, 100.0)));
    assert!(filler.current_point() == p(200.0, 100.0));
}

#[test]
fn path_extent_covers_circle() {
    let mut filler = Filler::new(256, 256, ScanRecorder::new());
    circle().add_to(&mut filler);

    assert!(filler.scanner().path_extent() == Some((p(0.0, 0.0), p(200.0, 200.0))));
}

#[test]
fn stop_closes_open_subpath() {
    let mut path = Path::new();
    path.start(p(0.0, 0.0));
    path.line(p(10.0, 0.0));
    path.line(p(10.0, 10.0));

    let mut filler = Filler::new(64, 64, ScanRecorder::new());
    path.add_to(&mut filler);

    assert!(
        filler.scanner().events()
            == &[
                ScanEvent::Start(p(0.0, 0.0)),
                ScanEvent::Line(p(10.0, 0.0)),
                ScanEvent::Line(p(10.0, 10.0)),
                ScanEvent::Line(p(0.0, 0.0)),
            ],
        "{:?}",
        filler.scanner().events()
    );
}

#[test]
fn subpath_that_returns_to_start_is_not_closed_twice() {
    let mut path = Path::new();
    path.start(p(0.0, 0.0));
    path.line(p(10.0, 0.0));
    path.line(p(0.0, 10.0));
    path.line(p(0.0, 0.0));
    path.stop(true);

    let mut filler = Filler::new(64, 64, ScanRecorder::new());
    path.add_to(&mut filler);

    assert!(filler.scanner().lines().count() == 3);
}

#[test]
fn start_closes_previous_subpath() {
    let mut filler = Filler::new(64, 64, ScanRecorder::new());

    filler.start(p(0.0, 0.0));
    filler.line(p(10.0, 0.0));
    filler.line(p(10.0, 10.0));
    filler.start(p(20.0, 20.0));
    filler.line(p(30.0, 20.0));
    filler.stop(true);

    assert!(
        filler.scanner().events()
            == &[
                ScanEvent::Start(p(0.0, 0.0)),
                ScanEvent::Line(p(10.0, 0.0)),
                ScanEvent::Line(p(10.0, 10.0)),
                ScanEvent::Line(p(0.0, 0.0)),
                ScanEvent::Start(p(20.0, 20.0)),
                ScanEvent::Line(p(30.0, 20.0)),
                ScanEvent::Line(p(20.0, 20.0)),
            ],
        "{:?}",
        filler.scanner().events()
    );
}

#[test]
fn current_point_follows_curves() {
    let mut filler = Filler::new(64, 64, ScanRecorder::new());

    filler.start(p(0.0, 0.0));
    filler.quad_bezier(p(10.0, 20.0), p(20.0, 0.0));
    assert!(filler.current_point() == p(20.0, 0.0));

    filler.cube_bezier(p(30.0, 10.0), p(40.0, -10.0), p(50.0, 0.0));
    assert!(filler.current_point() == p(50.0, 0.0));
}

#[test]
fn replaying_path_matches_direct_calls() {
    let mut path = Path::new();
    path.start(p(5.0, 5.0));
    path.line(p(40.0, 5.0));
    path.cube_bezier(p(60.0, 5.0), p(60.0, 40.0), p(40.0, 40.0));
    path.quad_bezier(p(5.0, 40.0), p(5.0, 20.0));
    path.stop(false);

    let mut direct = Filler::new(128, 128, ScanRecorder::new());
    direct.start(p(5.0, 5.0));
    direct.line(p(40.0, 5.0));
    direct.cube_bezier(p(60.0, 5.0), p(60.0, 40.0), p(40.0, 40.0));
    direct.quad_bezier(p(5.0, 40.0), p(5.0, 20.0));
    direct.stop(false);

    let mut replayed = Filler::new(128, 128, ScanRecorder::new());
    path.add_to(&mut replayed);

    assert!(direct.into_scanner() == replayed.into_scanner());
}

#[test]
fn clear_keeps_flattener_stacks() {
    let mut filler = Filler::new(256, 256, ScanRecorder::new());

    filler.start(p(0.0, 0.0));
    filler.cube_bezier(p(0.0, 100.0), p(100.0, 100.0), p(100.0, 0.0));
    let capacity = filler.flattener_mut().stack_capacity();

    filler.clear();

    assert!(filler.flattener_mut().stack_capacity() == capacity);
    assert!(filler.scanner().events().is_empty());
    assert!(filler.scanner().path_extent().is_none());
    assert!(filler.current_point() == Point::ZERO);

    // Clearing should not leave a subpath to close
    filler.start(p(1.0, 1.0));
    assert!(filler.scanner().events() == &[ScanEvent::Start(p(1.0, 1.0))]);
}

#[test]
fn draw_is_passed_to_scanner() {
    let mut filler = Filler::new(64, 64, ScanRecorder::new());

    circle().add_to(&mut filler);
    filler.draw();
    filler.clear();
    circle().add_to(&mut filler);
    filler.draw();

    assert!(filler.scanner().draw_count() == 2);
}

#[test]
fn bounds_are_passed_to_scanner() {
    let mut filler = Filler::new(300, 200, ScanRecorder::new());
    assert!(filler.scanner().bounds() == (300, 200));
    assert!(filler.split_scales() == SplitScales { quadratic: 32, cubic: 16 });

    filler.set_bounds(100, 20);
    assert!(filler.scanner().bounds() == (100, 20));
    assert!(filler.split_scales() == SplitScales { quadratic: 64, cubic: 32 });
}

#[test]
fn negative_bounds_are_treated_as_empty() {
    let filler = Filler::new(-10, -20, ScanRecorder::new());

    assert!(filler.scanner().bounds() == (0, 0));
    assert!(filler.split_scales() == SplitScales::default());
    assert!(filler.split_scales() == SplitScales { quadratic: 128, cubic: 64 });
}

#[test]
fn filler_is_a_rasterizer() {
    fn send_lines(rasterizer: &mut dyn Rasterizer) {
        rasterizer.start(p(0.0, 0.0));
        rasterizer.join_f();
        rasterizer.line_f(p(10.0, 0.0));
        rasterizer.line_f(p(10.0, 10.0));
        rasterizer.stop(true);
    }

    let mut filler = Filler::new(64, 64, ScanRecorder::new());
    send_lines(&mut filler);

    assert!(filler.scanner().lines().collect::<Vec<_>>() == vec![p(10.0, 0.0), p(10.0, 10.0), p(0.0, 0.0)]);
}

#[test]
#[should_panic]
fn curve_too_deep_to_flatten_panics() {
    let mut filler = Filler::new(512, 512, ScanRecorder::new());
    filler.flattener_mut().set_split_scales(SplitScales { quadratic: 1, cubic: 1 });

    filler.start(Point::from_raw(i32::MIN, 0));
    filler.quad_bezier(Point::from_raw(i32::MAX, 1), Point::from_raw(i32::MIN, 64));
}
