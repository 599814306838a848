//! `Fr`, the JubJub scalar field: a 252-bit prime field stored in four
//! 64-bit limbs in Montgomery form.
//!
//! The modulus is
//! `r = 0x0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::util::{adc, mac, sbb};

/// An element of the JubJub scalar field `GF(r)`, held internally in
/// Montgomery form (`data` is the image of the abstract value under
/// multiplication by `R = 2^256 mod r`).
#[derive(Copy, Clone)]
pub struct Fr(pub(crate) [u64; 4]);

/// `r` in little-endian 64-bit limbs.
pub(crate) const MODULUS: Fr = Fr([
    0xd0970e5ed6f72cb7,
    0xa6682093ccc81082,
    0x06673b0101343b00,
    0x0e7db4ea6533afa9,
]);

/// `-r^{-1} mod 2^64`.
const INV: u64 = 0x1ba3a358ef788ef9;

/// `R = 2^256 mod r`, the Montgomery image of one.
const R1: Fr = Fr([
    0x25f80bb3b99607d9,
    0xf315d62f66b6e750,
    0x932514eeeb8814f4,
    0x09a6fc6f479155c6,
]);

/// `R^2 mod r`.
const R2: Fr = Fr([
    0x67719aa495e57731,
    0x51b0cef09ce3fc26,
    0x69dab7fac026e9a5,
    0x04f6547b8d127688,
]);

/// `R^3 mod r`.
const R3: Fr = Fr([
    0xe0d6c6563d830544,
    0x323e3883598d0f85,
    0xf0fea3004c2e2ba8,
    0x05874f84946737ec,
]);

impl fmt::Debug for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Fr(0x")?;
        for b in bytes.iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl Default for Fr {
    fn default() -> Self {
        Fr::zero()
    }
}

impl ConstantTimeEq for Fr {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Fr {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fr {}

impl ConditionallySelectable for Fr {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fr([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Fr {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Fr {
    pub const WIDTH: usize = 4;
    pub const BYTE_SIZE: usize = Fr::WIDTH * 8;

    /// The additive identity.
    pub const fn zero() -> Self {
        Fr([0, 0, 0, 0])
    }

    /// The multiplicative identity.
    pub const fn one() -> Self {
        R1
    }

    /// Draws a uniform element by filling a 64-byte buffer and reducing it.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; Fr::BYTE_SIZE * 2];
        rng.fill_bytes(&mut bytes);
        Fr::from_bytes_wide(&bytes)
    }

    /// Converts raw (non-Montgomery) little-endian limbs into their
    /// Montgomery-form `Fr`.
    pub const fn from_raw(values: [u64; 4]) -> Self {
        (&Fr(values)).mul(&R2)
    }

    /// Reduces a uniformly-random 512-bit little-endian buffer modulo `r`.
    pub fn from_bytes_wide(bytes: &[u8; Fr::BYTE_SIZE * 2]) -> Self {
        let mut d0 = [0u64; 4];
        let mut d1 = [0u64; 4];
        for i in 0..4 {
            d0[i] = u64::from_le_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap());
            d1[i] = u64::from_le_bytes(bytes[32 + i * 8..32 + i * 8 + 8].try_into().unwrap());
        }
        Fr(d0).mul(&R2).add(&Fr(d1).mul(&R3))
    }

    /// Parses a canonical 32-byte little-endian encoding, rejecting any
    /// value `>= r`.
    pub fn from_bytes(bytes: &[u8; Fr::BYTE_SIZE]) -> CtOption<Self> {
        let mut tmp = [0u64; 4];
        for i in 0..4 {
            tmp[i] = u64::from_le_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap());
        }

        let (_, borrow) = sbb(tmp[0], MODULUS.0[0], 0);
        let (_, borrow) = sbb(tmp[1], MODULUS.0[1], borrow);
        let (_, borrow) = sbb(tmp[2], MODULUS.0[2], borrow);
        let (_, borrow) = sbb(tmp[3], MODULUS.0[3], borrow);
        let is_some = (borrow as u8) & 1;

        let value = Fr(tmp).mul(&R2);
        CtOption::new(value, Choice::from(is_some))
    }

    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    /// Re-encodes this scalar's canonical byte image as a base-field
    /// element, if it happens to fall within `Fq`'s range.
    pub fn to_bls_scalar(&self) -> CtOption<crate::Fq> {
        crate::Fq::from_bytes(&self.to_bytes())
    }

    /// Strips the Montgomery radix and emits 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; Fr::BYTE_SIZE] {
        let point = Fr::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);

        let mut bytes = [0u8; Fr::BYTE_SIZE];
        bytes[0..8].copy_from_slice(&point.0[0].to_le_bytes());
        bytes[8..16].copy_from_slice(&point.0[1].to_le_bytes());
        bytes[16..24].copy_from_slice(&point.0[2].to_le_bytes());
        bytes[24..32].copy_from_slice(&point.0[3].to_le_bytes());
        bytes
    }

    pub fn doubles(&self) -> Self {
        self.add(self)
    }

    pub const fn square(&self) -> Self {
        let (r1, carry) = mac(0, self.0[0], self.0[1], 0);
        let (r2, carry) = mac(0, self.0[0], self.0[2], carry);
        let (r3, r4) = mac(0, self.0[0], self.0[3], carry);

        let (r3, carry) = mac(r3, self.0[1], self.0[2], 0);
        let (r4, r5) = mac(r4, self.0[1], self.0[3], carry);

        let (r5, r6) = mac(r5, self.0[2], self.0[3], 0);

        let r7 = r6 >> 63;
        let r6 = (r6 << 1) | (r5 >> 63);
        let r5 = (r5 << 1) | (r4 >> 63);
        let r4 = (r4 << 1) | (r3 >> 63);
        let r3 = (r3 << 1) | (r2 >> 63);
        let r2 = (r2 << 1) | (r1 >> 63);
        let r1 = r1 << 1;

        let (r0, carry) = mac(0, self.0[0], self.0[0], 0);
        let (r1, carry) = adc(r1, 0, carry);
        let (r2, carry) = mac(r2, self.0[1], self.0[1], carry);
        let (r3, carry) = adc(r3, 0, carry);
        let (r4, carry) = mac(r4, self.0[2], self.0[2], carry);
        let (r5, carry) = adc(r5, 0, carry);
        let (r6, carry) = mac(r6, self.0[3], self.0[3], carry);
        let (r7, _) = adc(r7, 0, carry);

        Fr::montgomery_reduce(r0, r1, r2, r3, r4, r5, r6, r7)
    }

    /// Left-to-right square-and-multiply, MSB-first over the four raw
    /// little-endian limbs of `exp`.
    pub fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut res = Fr::one();
        for limb in exp.iter().rev() {
            for j in (0..64).rev() {
                res = res.square();
                if ((limb >> j) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Montgomery-reduces this value in place, i.e. produces the `Fr` whose
    /// stored limbs hold the literal (non-Montgomery) integer value of
    /// `self`. Used internally by [`Fr::compute_windowed_non_adjacent`].
    fn self_reduce(&self) -> Self {
        Fr::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0)
    }

    /// Right-shifts the stored limbs by `n` bits. Saturates to zero for
    /// `n >= 256`.
    ///
    /// This operates directly on whatever integer is currently held in
    /// `self` (raw or Montgomery); it is only meaningful when `self` is
    /// known to hold a raw (non-Montgomery) value, as in
    /// [`Fr::compute_windowed_non_adjacent`].
    pub fn div_n(&mut self, n: u32) {
        if n >= 256 {
            self.0 = [0, 0, 0, 0];
            return;
        }

        let limb_shift = (n / 64) as usize;
        let bit_shift = n % 64;

        if limb_shift > 0 {
            let mut shifted = [0u64; 4];
            for i in 0..4 {
                if i + limb_shift < 4 {
                    shifted[i] = self.0[i + limb_shift];
                }
            }
            self.0 = shifted;
        }

        if bit_shift > 0 {
            let mut t = 0u64;
            for i in (0..4).rev() {
                let t2 = self.0[i] << (64 - bit_shift);
                self.0[i] = (self.0[i] >> bit_shift) | t;
                t = t2;
            }
        }
    }

    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow(&[
            0xb425c397b5bdcb2e,
            0x299a0824f3320420,
            0x4199cec0404d0ec0,
            0x039f6d3a994cebea,
        ]);
        let is_square = sqrt.square().ct_eq(self);
        CtOption::new(sqrt, is_square)
    }

    /// Fermat inversion via a fixed addition chain for `r - 2`.
    pub fn invert(&self) -> CtOption<Self> {
        fn square_assign_multi(n: &mut Fr, num_times: usize) {
            for _ in 0..num_times {
                *n = n.square();
            }
        }

        let mut t1 = self.square();
        let mut t0 = t1.square();
        let mut t3 = t0 * t1;
        let t6 = t3 * *self;
        let t7 = t6 * t1;
        let t12 = t7 * t3;
        let t13 = t12 * t0;
        let t16 = t12 * t3;
        let t2 = t13 * t3;
        let t15 = t16 * t3;
        let t19 = t2 * t0;
        let t9 = t15 * t3;
        let t18 = t9 * t3;
        let t14 = t18 * t1;
        let t4 = t18 * t0;
        let t8 = t18 * t3;
        let t17 = t14 * t3;
        let t11 = t8 * t3;
        t1 = t17 * t3;
        let t5 = t11 * t3;
        t3 = t5 * t0;
        t0 = t5.square();

        square_assign_multi(&mut t0, 5);
        t0 *= t3;
        square_assign_multi(&mut t0, 6);
        t0 *= t8;
        square_assign_multi(&mut t0, 7);
        t0 *= t19;
        square_assign_multi(&mut t0, 6);
        t0 *= t13;
        square_assign_multi(&mut t0, 8);
        t0 *= t14;
        square_assign_multi(&mut t0, 6);
        t0 *= t18;
        square_assign_multi(&mut t0, 7);
        t0 *= t17;
        square_assign_multi(&mut t0, 5);
        t0 *= t16;
        square_assign_multi(&mut t0, 3);
        t0 *= *self;
        square_assign_multi(&mut t0, 11);
        t0 *= t11;
        square_assign_multi(&mut t0, 8);
        t0 *= t5;
        square_assign_multi(&mut t0, 5);
        t0 *= t15;
        square_assign_multi(&mut t0, 8);
        t0 *= *self;
        square_assign_multi(&mut t0, 12);
        t0 *= t13;
        square_assign_multi(&mut t0, 7);
        t0 *= t9;
        square_assign_multi(&mut t0, 5);
        t0 *= t15;
        square_assign_multi(&mut t0, 14);
        t0 *= t14;
        square_assign_multi(&mut t0, 5);
        t0 *= t13;
        square_assign_multi(&mut t0, 2);
        t0 *= *self;
        square_assign_multi(&mut t0, 6);
        t0 *= *self;
        square_assign_multi(&mut t0, 9);
        t0 *= t7;
        square_assign_multi(&mut t0, 6);
        t0 *= t12;
        square_assign_multi(&mut t0, 8);
        t0 *= t11;
        square_assign_multi(&mut t0, 3);
        t0 *= *self;
        square_assign_multi(&mut t0, 12);
        t0 *= t9;
        square_assign_multi(&mut t0, 11);
        t0 *= t8;
        square_assign_multi(&mut t0, 8);
        t0 *= t7;
        square_assign_multi(&mut t0, 4);
        t0 *= t6;
        square_assign_multi(&mut t0, 10);
        t0 *= t5;
        square_assign_multi(&mut t0, 7);
        t0 *= t3;
        square_assign_multi(&mut t0, 6);
        t0 *= t4;
        square_assign_multi(&mut t0, 7);
        t0 *= t3;
        square_assign_multi(&mut t0, 5);
        t0 *= t2;
        square_assign_multi(&mut t0, 6);
        t0 *= t2;
        square_assign_multi(&mut t0, 7);
        t0 *= t1;

        CtOption::new(t0, Choice::from((!self.is_zero()) as u8))
    }

    pub fn mod_2_pow_k(&self, k: u8) -> u8 {
        (self.0[0] & ((1u64 << k) - 1)) as u8
    }

    /// Interprets the low `w` bits of `self` as a signed digit in
    /// `(-2^{w-1}, 2^{w-1}]`.
    pub fn mod_k(&self, w: u8) -> i8 {
        assert!((1..=8).contains(&w));
        let modulus = self.mod_2_pow_k(w) as i32;
        let two_pow_w_minus_one = 1i32 << (w - 1);
        let result = if modulus >= two_pow_w_minus_one {
            modulus - (1i32 << w)
        } else {
            modulus
        };
        result as i8
    }

    /// Produces a width-`w` windowed non-adjacent-form expansion of this
    /// scalar: 256 signed digits `k_i` with `self = sum(k_i * 2^i)`, each
    /// `k_i` odd or zero, no two consecutive digits both nonzero.
    pub fn compute_windowed_non_adjacent(&self, width: u8) -> [i8; 256] {
        let mut k = self.self_reduce();
        let one = Fr::one().self_reduce();
        let mut res = [0i8; 256];

        let mut i = 0usize;
        while i < 256 && cmp_raw(&k, &one) != Ordering::Less {
            if !k.is_even() {
                let ki = k.mod_k(width);
                res[i] = ki;
                k = k.sub(&Fr::raw_digit(ki));
            } else {
                res[i] = 0;
            }
            k.div_n(1);
            i += 1;
        }
        res
    }

    /// Builds the raw (non-Montgomery) representation of a small signed
    /// digit, for use against another raw-domain `Fr` value. Only
    /// meaningful in the raw domain established by [`Fr::self_reduce`].
    fn raw_digit(value: i8) -> Self {
        let f = Fr([value.unsigned_abs() as u64, 0, 0, 0]);
        if value < 0 {
            f.neg()
        } else {
            f
        }
    }

    const fn montgomery_reduce(
        t0: u64,
        t1: u64,
        t2: u64,
        t3: u64,
        t4: u64,
        t5: u64,
        t6: u64,
        t7: u64,
    ) -> Self {
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS.0[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS.0[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS.0[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS.0[3], carry);
        let (r4, carry2) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS.0[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS.0[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS.0[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS.0[3], carry);
        let (r5, carry2) = adc(t5, carry2, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS.0[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS.0[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS.0[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS.0[3], carry);
        let (r6, carry2) = adc(t6, carry2, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS.0[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS.0[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS.0[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS.0[3], carry);
        let (r7, _) = adc(t7, carry2, carry);

        (&Fr([r4, r5, r6, r7])).sub(&MODULUS)
    }

    const fn add(&self, rhs: &Fr) -> Fr {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);
        (&Fr([d0, d1, d2, d3])).sub(&MODULUS)
    }

    const fn sub(&self, rhs: &Fr) -> Fr {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        let (d0, carry) = adc(d0, MODULUS.0[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS.0[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS.0[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS.0[3] & borrow, carry);

        Fr([d0, d1, d2, d3])
    }

    const fn mul(&self, rhs: &Fr) -> Fr {
        let (r0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (r1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (r2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (r3, r4) = mac(0, self.0[0], rhs.0[3], carry);

        let (r1, carry) = mac(r1, self.0[1], rhs.0[0], 0);
        let (r2, carry) = mac(r2, self.0[1], rhs.0[1], carry);
        let (r3, carry) = mac(r3, self.0[1], rhs.0[2], carry);
        let (r4, carry) = mac(r4, self.0[1], rhs.0[3], carry);
        let (r5, _) = adc(0, 0, carry);

        let (r2, carry) = mac(r2, self.0[2], rhs.0[0], 0);
        let (r3, carry) = mac(r3, self.0[2], rhs.0[1], carry);
        let (r4, carry) = mac(r4, self.0[2], rhs.0[2], carry);
        let (r5, carry) = mac(r5, self.0[2], rhs.0[3], carry);
        let (r6, _) = adc(0, 0, carry);

        let (r3, carry) = mac(r3, self.0[3], rhs.0[0], 0);
        let (r4, carry) = mac(r4, self.0[3], rhs.0[1], carry);
        let (r5, carry) = mac(r5, self.0[3], rhs.0[2], carry);
        let (r6, carry) = mac(r6, self.0[3], rhs.0[3], carry);
        let (r7, _) = adc(0, 0, carry);

        Fr::montgomery_reduce(r0, r1, r2, r3, r4, r5, r6, r7)
    }

    const fn negate(&self) -> Fr {
        let (d0, borrow) = sbb(MODULUS.0[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS.0[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS.0[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS.0[3], self.0[3], borrow);

        let is_nonzero = (self.0[0] | self.0[1] | self.0[2] | self.0[3]) != 0;
        let mask = (is_nonzero as u64).wrapping_neg();

        Fr([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }
}

/// Compares two `Fr` values as raw unsigned 256-bit integers, most
/// significant limb first. Used solely to drive the NAF termination test in
/// [`Fr::compute_windowed_non_adjacent`]; it carries no meaning beyond
/// "greater than the canonical representation of one".
fn cmp_raw(lhs: &Fr, rhs: &Fr) -> Ordering {
    for i in (0..4).rev() {
        match lhs.0[i].cmp(&rhs.0[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

impl From<u64> for Fr {
    fn from(value: u64) -> Self {
        Fr([value, 0, 0, 0]).mul(&R2)
    }
}

impl Neg for Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        self.negate()
    }
}

impl Neg for &Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        self.negate()
    }
}

impl Add<&Fr> for &Fr {
    type Output = Fr;
    fn add(self, rhs: &Fr) -> Fr {
        (*self).add(rhs)
    }
}

impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        &self + &rhs
    }
}

impl AddAssign<&Fr> for Fr {
    fn add_assign(&mut self, rhs: &Fr) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Fr {
    fn add_assign(&mut self, rhs: Fr) {
        *self += &rhs;
    }
}

impl Sub<&Fr> for &Fr {
    type Output = Fr;
    fn sub(self, rhs: &Fr) -> Fr {
        (*self).sub(rhs)
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        &self - &rhs
    }
}

impl SubAssign<&Fr> for Fr {
    fn sub_assign(&mut self, rhs: &Fr) {
        *self = &*self - rhs;
    }
}

impl SubAssign for Fr {
    fn sub_assign(&mut self, rhs: Fr) {
        *self -= &rhs;
    }
}

impl Mul<&Fr> for &Fr {
    type Output = Fr;
    fn mul(self, rhs: &Fr) -> Fr {
        (*self).mul(rhs)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        &self * &rhs
    }
}

impl MulAssign<&Fr> for Fr {
    fn mul_assign(&mut self, rhs: &Fr) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Fr {
    fn mul_assign(&mut self, rhs: Fr) {
        *self *= &rhs;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_support::serialize_bytes(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: [u8; 32] = crate::serde_support::deserialize_bytes(deserializer)?;
        Option::from(Fr::from_bytes(&bytes))
            .ok_or_else(|| serde::de::Error::custom("Fr value was not canonical"))
    }
}
