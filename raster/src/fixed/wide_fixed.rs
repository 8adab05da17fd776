/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fixed::*;
use crate::consts::*;

use std::ops::*;

///
/// A signed fixed-point value with 12 fractional bits (52.12)
///
/// This is the natural format for the product of two `Fixed` values, such as a dot product.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct WideFixed(pub i64);

impl WideFixed {
    pub const ZERO: WideFixed = WideFixed(0);

    pub const ONE: WideFixed = WideFixed(1 << WIDE_FIXED_SHIFT);

    #[inline]
    pub fn from_f64(val: f64) -> WideFixed {
        WideFixed((val * (1i64 << WIDE_FIXED_SHIFT) as f64) as i64)
    }

    #[inline]
    pub fn from_int(val: i64) -> WideFixed {
        WideFixed(val << WIDE_FIXED_SHIFT)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1i64 << WIDE_FIXED_SHIFT) as f64
    }

    ///
    /// Drops the extra fractional bits, truncating towards negative infinity
    ///
    #[inline]
    pub fn to_fixed(self) -> Fixed {
        Fixed((self.0 >> (WIDE_FIXED_SHIFT - FIXED_SHIFT)) as i32)
    }
}

impl From<Fixed> for WideFixed {
    #[inline]
    fn from(val: Fixed) -> WideFixed {
        WideFixed((val.0 as i64) << (WIDE_FIXED_SHIFT - FIXED_SHIFT))
    }
}

impl Add<WideFixed> for WideFixed {
    type Output = WideFixed;

    #[inline]
    fn add(self, val: WideFixed) -> WideFixed {
        WideFixed(self.0 + val.0)
    }
}

impl Sub<WideFixed> for WideFixed {
    type Output = WideFixed;

    #[inline]
    fn sub(self, val: WideFixed) -> WideFixed {
        WideFixed(self.0 - val.0)
    }
}

impl Neg for WideFixed {
    type Output = WideFixed;

    #[inline]
    fn neg(self) -> WideFixed {
        WideFixed(-self.0)
    }
}
