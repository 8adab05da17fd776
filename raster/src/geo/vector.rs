/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

impl Point {
    ///
    /// The dot product of two vectors, at the widened precision
    ///
    #[inline]
    pub fn dot(self, other: Point) -> WideFixed {
        let (px, py) = (self.x.0 as i64, self.y.0 as i64);
        let (qx, qy) = (other.x.0 as i64, other.y.0 as i64);

        WideFixed(px * qx + py * qy)
    }

    ///
    /// The z component of the cross product of two vectors, at the widened precision
    ///
    /// This is positive when `other` is clockwise from `self` on screen (where Y grows downwards).
    ///
    #[inline]
    pub fn cross(self, other: Point) -> WideFixed {
        let (px, py) = (self.x.0 as i64, self.y.0 as i64);
        let (qx, qy) = (other.x.0 as i64, other.y.0 as i64);

        WideFixed(px * qy - qx * py)
    }

    ///
    /// The length of this vector
    ///
    /// The square root is taken in floating point and the result truncated back to fixed-point.
    ///
    #[inline]
    pub fn length(self) -> Fixed {
        let x = self.x.0 as f64;
        let y = self.y.0 as f64;

        Fixed((x * x + y * y).sqrt() as i32)
    }

    ///
    /// Scales this vector so that it has the specified length, or returns the zero vector if this vector has no length
    ///
    pub fn normalize(self, length: Fixed) -> Point {
        let current = self.length();
        if current.0 == 0 {
            return Point::ZERO;
        }

        let (s, t) = (length.0 as i64, current.0 as i64);
        let x = self.x.0 as i64 * s / t;
        let y = self.y.0 as i64 * s / t;

        Point::from_raw(x as i32, y as i32)
    }

    ///
    /// Rotates this vector 90 degrees clockwise on screen: `(1, 0)` becomes `(0, 1)`
    ///
    #[inline]
    pub fn rot90_cw(self) -> Point {
        Point::new(-self.y, self.x)
    }

    ///
    /// Rotates this vector 90 degrees counter-clockwise on screen: `(1, 0)` becomes `(0, -1)`
    ///
    #[inline]
    pub fn rot90_ccw(self) -> Point {
        Point::new(self.y, -self.x)
    }

    ///
    /// The vector rejection of this vector from `onto`: the part of this vector perpendicular to `onto`
    ///
    /// If `onto` is the zero vector, this vector is returned unchanged.
    ///
    pub fn rejection(self, onto: Point) -> Point {
        let onto_len_sq = onto.dot(onto).0;
        if onto_len_sq == 0 {
            return self;
        }

        let scale = (self.dot(onto).0 << 6) / onto_len_sq;
        self - onto * Fixed(scale as i32)
    }
}
