/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
//! Wide intermediate arithmetic for fixed-point coordinate math.
//!
//! `FixedCoord` values are scaled by 10^18, so a squared distance between
//! two coordinates can reach roughly (3.6e20)^2, well past `i128::MAX`.
//! The DDA edge rasterizer (`oir_geohash::raster`) needs exact comparisons
//! between such squared distances (the "is this a vertex crossing"
//! tie-break is an exact integer test, not an approximation), so we carry
//! our own minimal 256-bit unsigned magnitude type rather than rounding
//! through `f64`. No bignum crate appears anywhere in the corpus this
//! workspace is grounded on, so this is hand-rolled the way the teacher
//! hand-rolls narrow, domain-specific numeric newtypes (see
//! `NormalizedAngle` in the teacher's `angle` module) rather than pulled in
//! as a dependency.

use std::cmp::Ordering;
use std::fmt;

/// unsigned 256-bit magnitude, `hi * 2^128 + lo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U256 {
    pub hi: u128,
    pub lo: u128,
}

impl U256 {
    pub const ZERO: U256 = U256 { hi: 0, lo: 0 };

    #[inline]
    pub fn from_u128(v: u128) -> Self {
        U256 { hi: 0, lo: v }
    }

    /// the squared magnitude of a signed fixed-point delta.
    pub fn from_squared_i128(delta: i128) -> Self {
        let u = delta.unsigned_abs();
        let (hi, lo) = mul_u128(u, u);
        U256 { hi, lo }
    }

    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        let (lo, carry) = self.lo.overflowing_add(rhs.lo);
        let (hi, carry1) = self.hi.overflowing_add(rhs.hi);
        let (hi, carry2) = hi.overflowing_add(if carry { 1 } else { 0 });
        if carry1 || carry2 {
            None
        } else {
            Some(U256 { hi, lo })
        }
    }

    /// saturating add — our sums of two bounded squared-coordinate terms
    /// never legitimately overflow 256 bits, so this degrades to `checked_add`
    /// in practice and only exists so call sites stay panic-free.
    pub fn add(self, rhs: U256) -> U256 {
        self.checked_add(rhs).unwrap_or(U256 { hi: u128::MAX, lo: u128::MAX })
    }

    /// `self - rhs`, assuming `self >= rhs`.
    pub fn sub(self, rhs: U256) -> U256 {
        let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
        let hi = self.hi.wrapping_sub(rhs.hi).wrapping_sub(if borrow { 1 } else { 0 });
        U256 { hi, lo }
    }

    pub fn abs_diff(self, rhs: U256) -> U256 {
        if self >= rhs {
            self.sub(rhs)
        } else {
            rhs.sub(self)
        }
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "0x{:032x}{:032x}", self.hi, self.lo)
        }
    }
}

/// full 256-bit product of two `u128` values, schoolbook multiplication on
/// 64-bit limbs so every partial product fits in a `u128`.
pub fn mul_u128(a: u128, b: u128) -> (u128, u128) {
    let a_lo = a as u64 as u128;
    let a_hi = (a >> 64) as u64 as u128;
    let b_lo = b as u64 as u128;
    let b_hi = (b >> 64) as u64 as u128;

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    let mid = lo_hi + (lo_lo >> 64) + (hi_lo & 0xFFFF_FFFF_FFFF_FFFF);
    let lo = (lo_lo & 0xFFFF_FFFF_FFFF_FFFF) | (mid << 64);
    let hi = hi_hi + (hi_lo >> 64) + (mid >> 64);
    (hi, lo)
}

/// divide a 256-bit magnitude `(hi, lo)` by a `u128` divisor, assuming the
/// quotient fits in a `u128` (true for every call site here: we only ever
/// divide a widened product back down by one of its original factors).
/// Plain binary long division — not hot-path performance critical since the
/// rasterizer calls it at most a few times per polygon edge.
fn div_u256_u128(hi: u128, lo: u128, divisor: u128) -> u128 {
    assert!(divisor != 0, "division by zero");
    // every divisor we ever see here is a single FixedCoord magnitude
    // (<= ~360e18 ~= 2^69), far below this bound — the margin keeps the
    // shift-subtract loop below from overflowing its 128-bit remainder.
    assert!(divisor < (1u128 << 127), "divisor too large for shift-subtract division");
    if hi == 0 {
        return lo / divisor;
    }
    let mut rem: u128 = 0;
    let mut quot: u128 = 0;
    for i in (0..256).rev() {
        let bit = if i >= 128 {
            (hi >> (i - 128)) & 1
        } else {
            (lo >> i) & 1
        };
        rem = (rem << 1) | bit;
        quot <<= 1;
        if rem >= divisor {
            rem -= divisor;
            quot |= 1;
        }
    }
    quot
}

/// exact `(a * b) / c` using a 256-bit intermediate product, truncating
/// toward zero like normal integer division. Used to compute the exact
/// parametric intersection of a segment with a grid line without ever
/// rounding through floating point.
pub fn mul_div(a: i128, b: i128, c: i128) -> i128 {
    assert!(c != 0, "division by zero in mul_div");
    let neg = (a < 0) ^ (b < 0) ^ (c < 0);
    let (hi, lo) = mul_u128(a.unsigned_abs(), b.unsigned_abs());
    let q = div_u256_u128(hi, lo, c.unsigned_abs());
    if neg {
        -(q as i128)
    } else {
        q as i128
    }
}

/// compares `a * b` against `c * d` exactly, where each product may exceed
/// `i128::MAX` (the ray-casting region test in the fill engine compares
/// products of two `FixedCoord` deltas, up to roughly `(3.6e20)^2`). Signs
/// are split out so the magnitude comparison only ever needs the unsigned
/// 256-bit product.
pub fn cmp_products(a: i128, b: i128, c: i128, d: i128) -> Ordering {
    let sign_ab = a.signum() * b.signum();
    let sign_cd = c.signum() * d.signum();
    if sign_ab != sign_cd {
        return sign_ab.cmp(&sign_cd);
    }
    let (hi, lo) = mul_u128(a.unsigned_abs(), b.unsigned_abs());
    let mag_ab = U256 { hi, lo };
    let (hi, lo) = mul_u128(c.unsigned_abs(), d.unsigned_abs());
    let mag_cd = U256 { hi, lo };
    if sign_ab >= 0 {
        mag_ab.cmp(&mag_cd)
    } else {
        mag_cd.cmp(&mag_ab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_products_handles_overflowing_magnitudes() {
        let big: i128 = 360_000_000_000_000_000_000;
        assert_eq!(cmp_products(big, big, big, big), Ordering::Equal);
        assert_eq!(cmp_products(big, big, big, 1), Ordering::Greater);
        assert_eq!(cmp_products(-big, big, big, big), Ordering::Less);
        assert_eq!(cmp_products(1, 1, 2, 2), Ordering::Less);
        assert_eq!(cmp_products(0, big, 0, -big), Ordering::Equal);
    }

    #[test]
    fn mul_u128_matches_u64_reference() {
        let a: u128 = 123_456_789_012_345;
        let b: u128 = 987_654_321_098_765;
        let (hi, lo) = mul_u128(a, b);
        assert_eq!(hi, 0);
        assert_eq!(lo, a * b);
    }

    #[test]
    fn mul_u128_wide_product() {
        let a: u128 = 1u128 << 100;
        let b: u128 = 1u128 << 100;
        let (hi, lo) = mul_u128(a, b);
        // a*b = 2^200, which is hi=2^(200-128)=2^72, lo=0
        assert_eq!(lo, 0);
        assert_eq!(hi, 1u128 << 72);
    }

    #[test]
    fn mul_div_exact() {
        assert_eq!(mul_div(7, 6, 3), 14);
        assert_eq!(mul_div(-7, 6, 3), -14);
        assert_eq!(mul_div(7, -6, 3), -14);
        assert_eq!(mul_div(-7, -6, 3), 14);
    }

    #[test]
    fn mul_div_large_operands() {
        let a: i128 = 180_000_000_000_000_000_000; // 180 * 1e18
        let b: i128 = 90_000_000_000_000_000_000; // 90 * 1e18
        let c: i128 = 45_000_000_000_000_000_000; // 45 * 1e18
        // (a*b)/c = a*(b/c) when exact = 180e18 * 2 = 360e18
        assert_eq!(mul_div(a, b, c), 360_000_000_000_000_000_000);
    }

    #[test]
    fn u256_from_squared_large_delta() {
        let delta: i128 = 360_000_000_000_000_000_000; // full longitude span
        let sq = U256::from_squared_i128(delta);
        // should not panic/overflow, and should be > u128::MAX since
        // (3.6e20)^2 ~= 1.3e41 > 3.4e38
        assert!(sq.hi > 0);
    }

    #[test]
    fn u256_ordering_and_abs_diff() {
        let a = U256::from_u128(100);
        let b = U256::from_u128(90);
        assert!(a > b);
        assert_eq!(a.abs_diff(b), U256::from_u128(10));
        assert_eq!(b.abs_diff(a), U256::from_u128(10));
    }
}
