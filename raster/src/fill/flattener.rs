/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rasterizer_trait::*;
use super::split_scales::*;
use crate::consts::*;
use crate::error::*;
use crate::fixed::*;

#[cfg(feature = "logging")]
use log::*;

/// Space needed on the point stack to flatten one quadratic curve
const QUAD_POINT_STACK: usize = 2 * MAX_SPLIT_DEPTH + 3;

/// Space needed on the point stack to flatten one cubic curve
const CUBE_POINT_STACK: usize = 3 * MAX_SPLIT_DEPTH + 4;

/// Space needed on the split stack to flatten one curve
const SPLIT_STACK: usize = MAX_SPLIT_DEPTH + 1;

///
/// Flattens bezier curves into lines
///
/// Rather than recursing, the flattener keeps the curves that are waiting to be processed on a stack. The stacks
/// grow to fit the deepest curve seen so far and are never shrunk, so a flattener that is reused does not need to
/// allocate once it has warmed up. A flattener can be used for only one curve at a time.
///
#[derive(Clone, Debug, Default)]
pub struct Flattener {
    /// The scale factors used to decide how many times to split a curve
    split_scales: SplitScales,

    /// Control points of the curves waiting to be flattened, stored end point first
    point_stack: Vec<Point>,

    /// The number of times each curve on the point stack still needs to be split
    split_stack: Vec<usize>,
}

#[inline]
fn max_abs(x: i64, y: i64) -> i64 {
    x.abs().max(y.abs())
}

///
/// The largest component of `a - 2b + c`: this shrinks by a factor of 4 every time the curve is halved
///
#[inline]
fn second_difference(a: Point, b: Point, c: Point) -> i64 {
    let dx = a.x.0 as i64 - 2 * b.x.0 as i64 + c.x.0 as i64;
    let dy = a.y.0 as i64 - 2 * b.y.0 as i64 + c.y.0 as i64;

    max_abs(dx, dy)
}

///
/// The largest component of `a - 3b + 3c - d`: this shrinks by a factor of 8 every time the curve is halved
///
#[inline]
fn third_difference(a: Point, b: Point, c: Point, d: Point) -> i64 {
    let dx = a.x.0 as i64 - 3 * b.x.0 as i64 + 3 * c.x.0 as i64 - d.x.0 as i64;
    let dy = a.y.0 as i64 - 3 * b.y.0 as i64 + 3 * c.y.0 as i64 - d.y.0 as i64;

    max_abs(dx, dy)
}

///
/// True if all of the points lie on a single line (or are all the same point)
///
fn is_collinear(points: &[Point]) -> bool {
    let origin = points[0];
    let delta = |p: &Point| (p.x.0 as i128 - origin.x.0 as i128, p.y.0 as i128 - origin.y.0 as i128);

    // Every pair of vectors from the first point must be parallel
    for (idx, p1) in points.iter().enumerate().skip(1) {
        let (x1, y1) = delta(p1);

        for p2 in points[(idx + 1)..].iter() {
            let (x2, y2) = delta(p2);

            if x1 * y2 - x2 * y1 != 0 {
                return false;
            }
        }
    }

    true
}

///
/// Converts the deviations of a curve into the number of times it must be halved
///
fn split_depth(mut quarter_deviation: i64, mut eighth_deviation: i64) -> Result<usize, RasterError> {
    let mut depth = 0;

    while quarter_deviation > 0 || eighth_deviation > 0 {
        quarter_deviation /= 4;
        eighth_deviation /= 8;
        depth += 1;
    }

    if depth > MAX_SPLIT_DEPTH {
        Err(RasterError::SplitDepthExceeded { depth })
    } else {
        Ok(depth)
    }
}

impl Flattener {
    ///
    /// Creates a flattener using the split scales for the smallest rasters
    ///
    pub fn new() -> Flattener {
        Flattener::default()
    }

    ///
    /// Creates a flattener with a custom set of split scales
    ///
    pub fn with_split_scales(split_scales: SplitScales) -> Flattener {
        Flattener {
            split_scales: split_scales.clamped(),
            point_stack: vec![],
            split_stack: vec![],
        }
    }

    ///
    /// Creates a flattener with the split scales for a raster of the specified size
    ///
    pub fn for_bounds(width: i32, height: i32) -> Flattener {
        Flattener::with_split_scales(SplitScales::for_bounds(width, height))
    }

    #[inline]
    pub fn split_scales(&self) -> SplitScales {
        self.split_scales
    }

    pub fn set_split_scales(&mut self, split_scales: SplitScales) {
        self.split_scales = split_scales.clamped();
    }

    ///
    /// Makes sure that the point and split stacks can hold at least the specified number of entries without
    /// reallocating
    ///
    pub fn ensure_capacity(&mut self, points: usize, splits: usize) {
        if self.point_stack.capacity() < points {
            self.point_stack.reserve(points - self.point_stack.len());
        }

        if self.split_stack.capacity() < splits {
            self.split_stack.reserve(splits - self.split_stack.len());
        }
    }

    ///
    /// The number of entries the point and split stacks can hold without reallocating
    ///
    #[inline]
    pub fn stack_capacity(&self) -> (usize, usize) {
        (self.point_stack.capacity(), self.split_stack.capacity())
    }

    ///
    /// Resizes the stacks so that they have at least the specified lengths
    ///
    fn grow_stacks(&mut self, points: usize, splits: usize) {
        #[cfg(feature = "logging")]
        {
            if points > self.point_stack.capacity() || splits > self.split_stack.capacity() {
                trace!("Growing flattener stacks to {} points, {} splits", points, splits);
            }
        }

        self.point_stack.resize(points, Point::ZERO);
        self.split_stack.resize(splits, 0);
    }

    ///
    /// Works out how many times the quadratic curve `a`, `b`, `c` needs to be halved before each piece can be
    /// replaced by two lines
    ///
    pub fn quad_split_depth(&self, a: Point, b: Point, c: Point) -> Result<usize, RasterError> {
        let deviation = second_difference(a, b, c) / self.split_scales.quadratic as i64;

        split_depth(deviation, 0)
    }

    ///
    /// Works out how many times the cubic curve `a`, `b`, `c`, `d` needs to be halved before each piece can be
    /// replaced by two lines
    ///
    pub fn cube_split_depth(&self, a: Point, b: Point, c: Point, d: Point) -> Result<usize, RasterError> {
        let third = third_difference(a, b, c, d) / self.split_scales.quadratic as i64;
        let second = second_difference(a, b, c).max(second_difference(b, c, d)) / self.split_scales.cubic as i64;

        split_depth(second, third)
    }

    ///
    /// Flattens the quadratic curve from `a` to `c` with control point `b`, sending the lines to `target`
    ///
    /// Nothing is sent to the target if the curve needs to be split too many times: this only happens for
    /// coordinates far outside the range the fixed-point format is intended for.
    ///
    pub fn quad_bezier<TTarget>(&mut self, target: &mut TTarget, a: Point, b: Point, c: Point) -> Result<(), RasterError>
    where
        TTarget: Rasterizer + ?Sized,
    {
        if is_collinear(&[a, b, c]) {
            target.line(c);
            return Ok(());
        }

        let depth = self.quad_split_depth(a, b, c)?;
        target.join_f();

        let (p_base, s_base) = (self.point_stack.len(), self.split_stack.len());
        self.grow_stacks(p_base + QUAD_POINT_STACK, s_base + SPLIT_STACK);

        self.split_stack[s_base] = depth;
        self.point_stack[p_base] = c;
        self.point_stack[p_base + 1] = b;
        self.point_stack[p_base + 2] = a;

        let mut frame = 0;
        loop {
            let splits = self.split_stack[s_base + frame];
            let p = &mut self.point_stack[(p_base + 2 * frame)..];

            if splits > 0 {
                // Split p[0..3] into p[0..3] and p[2..5]: the second half becomes the next frame, and covers the start of the curve
                let control = p[1];
                p[4] = p[2];
                p[3] = (p[4] + control) / 2;
                p[1] = (p[0] + control) / 2;
                p[2] = (p[1] + p[3]) / 2;

                self.split_stack[s_base + frame] = splits - 1;
                self.split_stack[s_base + frame + 1] = splits - 1;
                frame += 1;
            } else {
                // Flat enough: replace with two lines via the midpoint
                let mid = (p[0] + p[1] * 2 + p[2]) / 4;
                let end = p[0];

                target.line_f(mid);
                target.line_f(end);

                if frame == 0 {
                    break;
                }
                frame -= 1;
            }
        }

        self.point_stack.truncate(p_base);
        self.split_stack.truncate(s_base);

        Ok(())
    }

    ///
    /// Flattens the cubic curve from `a` to `d` with control points `b` and `c`, sending the lines to `target`
    ///
    pub fn cube_bezier<TTarget>(&mut self, target: &mut TTarget, a: Point, b: Point, c: Point, d: Point) -> Result<(), RasterError>
    where
        TTarget: Rasterizer + ?Sized,
    {
        if is_collinear(&[a, b, c, d]) {
            target.line(d);
            return Ok(());
        }

        let depth = self.cube_split_depth(a, b, c, d)?;
        target.join_f();

        let (p_base, s_base) = (self.point_stack.len(), self.split_stack.len());
        self.grow_stacks(p_base + CUBE_POINT_STACK, s_base + SPLIT_STACK);

        self.split_stack[s_base] = depth;
        self.point_stack[p_base] = d;
        self.point_stack[p_base + 1] = c;
        self.point_stack[p_base + 2] = b;
        self.point_stack[p_base + 3] = a;

        let mut frame = 0;
        loop {
            let splits = self.split_stack[s_base + frame];
            let p = &mut self.point_stack[(p_base + 3 * frame)..];

            if splits > 0 {
                // Split p[0..4] into p[0..4] and p[3..7]
                let m01 = (p[0] + p[1]) / 2;
                let m12 = (p[1] + p[2]) / 2;
                let m23 = (p[2] + p[3]) / 2;

                p[6] = p[3];
                p[5] = m23;
                p[1] = m01;
                p[2] = (m01 + m12) / 2;
                p[4] = (m12 + m23) / 2;
                p[3] = (p[2] + p[4]) / 2;

                self.split_stack[s_base + frame] = splits - 1;
                self.split_stack[s_base + frame + 1] = splits - 1;
                frame += 1;
            } else {
                let mid = (p[0] + (p[1] + p[2]) * 3 + p[3]) / 8;
                let end = p[0];

                target.line_f(mid);
                target.line_f(end);

                if frame == 0 {
                    break;
                }
                frame -= 1;
            }
        }

        self.point_stack.truncate(p_base);
        self.split_stack.truncate(s_base);

        Ok(())
    }
}
