/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use std::fmt;
use std::ops::*;

///
/// A signed fixed-point value with 6 fractional bits (26.6)
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed(pub i32);

impl Fixed {
    /// The value 0.0
    pub const ZERO: Fixed = Fixed(0);

    /// The value 1.0
    pub const ONE: Fixed = Fixed(FIXED_ONE);

    ///
    /// Converts a floating point value to fixed-point, truncating towards zero
    ///
    #[inline]
    pub fn from_f64(val: f64) -> Fixed {
        Fixed((val * FIXED_ONE as f64) as i32)
    }

    ///
    /// Creates a fixed-point value representing a whole number
    ///
    #[inline]
    pub fn from_int(val: i32) -> Fixed {
        Fixed(val << FIXED_SHIFT)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / FIXED_ONE as f64
    }

    #[inline]
    pub fn abs(self) -> Fixed {
        Fixed(self.0.abs())
    }

    /// The whole number part of this value, rounded towards negative infinity
    #[inline]
    pub fn floor(self) -> i32 {
        self.0 >> FIXED_SHIFT
    }
}

impl From<i32> for Fixed {
    #[inline]
    fn from(val: i32) -> Self {
        Fixed(val)
    }
}

impl From<Fixed> for i32 {
    #[inline]
    fn from(val: Fixed) -> i32 {
        val.0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.to_f64())
    }
}

impl Add<Fixed> for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, val: Fixed) -> Fixed {
        Fixed(self.0 + val.0)
    }
}

impl Sub<Fixed> for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, val: Fixed) -> Fixed {
        Fixed(self.0 - val.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl AddAssign<Fixed> for Fixed {
    #[inline]
    fn add_assign(&mut self, val: Fixed) {
        self.0 += val.0;
    }
}

impl SubAssign<Fixed> for Fixed {
    #[inline]
    fn sub_assign(&mut self, val: Fixed) {
        self.0 -= val.0;
    }
}

///
/// Fixed-point multiplication: the result is truncated back to 6 fractional bits
///
impl Mul<Fixed> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, val: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * val.0 as i64) / FIXED_ONE as i64) as i32)
    }
}

/// Scales by a whole number
impl Mul<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, val: i32) -> Fixed {
        Fixed(self.0 * val)
    }
}

/// Divides by a whole number, truncating towards zero
impl Div<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn div(self, val: i32) -> Fixed {
        Fixed(self.0 / val)
    }
}
