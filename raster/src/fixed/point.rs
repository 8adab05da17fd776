/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed::*;

use std::fmt;
use std::ops::*;

///
/// A point (or vector) with 26.6 fixed-point coordinates
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Fixed,
    pub y: Fixed,
}

impl Point {
    /// The origin, or the zero vector
    pub const ZERO: Point = Point { x: Fixed::ZERO, y: Fixed::ZERO };

    #[inline]
    pub fn new(x: Fixed, y: Fixed) -> Point {
        Point { x, y }
    }

    ///
    /// Creates a point from raw fixed-point values (ie, where 64 represents 1.0)
    ///
    #[inline]
    pub fn from_raw(x: i32, y: i32) -> Point {
        Point { x: Fixed(x), y: Fixed(y) }
    }

    ///
    /// Creates a point from floating-point coordinates, truncating each towards zero
    ///
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Point {
        Point { x: Fixed::from_f64(x), y: Fixed::from_f64(y) }
    }

    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    #[inline]
    fn add(self, val: Point) -> Point {
        Point::new(self.x + val.x, self.y + val.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, val: Point) -> Point {
        Point::new(self.x - val.x, self.y - val.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Scales the vector by a fixed-point factor
impl Mul<Fixed> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, val: Fixed) -> Point {
        Point::new(self.x * val, self.y * val)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, val: i32) -> Point {
        Point::new(self.x * val, self.y * val)
    }
}

impl Div<i32> for Point {
    type Output = Point;

    #[inline]
    fn div(self, val: i32) -> Point {
        Point::new(self.x / val, self.y / val)
    }
}
