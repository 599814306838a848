//! "Niels" point forms: precomputed `(y+x, y-x, 2d*xy)` tuples that turn
//! the unified addition formula into the cheaper mixed-addition formula
//! used by the scalar multiplication ladder.

use core::ops::Mul;

use subtle::{Choice, ConditionallySelectable};

use crate::affine::Affine;
use crate::constants::EDWARDS_D2;
use crate::extended::Extended;
use crate::fr::Fr;
use crate::Fq;

/// An affine point's Niels form: fixed-base ladders (e.g. against
/// [`Extended::generator`]) use this to avoid carrying a `z` coordinate at
/// all.
#[derive(Copy, Clone, Debug)]
pub(crate) struct AffineNiels {
    pub(crate) y_plus_x: Fq,
    pub(crate) y_minus_x: Fq,
    pub(crate) t2d: Fq,
}

impl Default for AffineNiels {
    fn default() -> Self {
        AffineNiels::identity()
    }
}

impl ConditionallySelectable for AffineNiels {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffineNiels {
            y_plus_x: Fq::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: Fq::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            t2d: Fq::conditional_select(&a.t2d, &b.t2d, choice),
        }
    }
}

impl From<&Affine> for AffineNiels {
    fn from(affine: &Affine) -> Self {
        AffineNiels {
            y_plus_x: affine.y + affine.x,
            y_minus_x: affine.y - affine.x,
            t2d: affine.x * affine.y * Fq::from_raw(EDWARDS_D2),
        }
    }
}

impl From<Affine> for AffineNiels {
    fn from(affine: Affine) -> Self {
        AffineNiels::from(&affine)
    }
}

impl AffineNiels {
    pub(crate) fn identity() -> Self {
        AffineNiels {
            y_plus_x: Fq::one(),
            y_minus_x: Fq::one(),
            t2d: Fq::zero(),
        }
    }

    /// The 252-bit double-and-add ladder, skipping the top four bits of the
    /// most significant byte of `by` (every valid scalar is `< 2^252`).
    pub(crate) fn multiply(&self, by: &[u8; 32]) -> Extended {
        let zero = AffineNiels::identity();
        let mut acc = Extended::identity();

        for (byte_index, byte) in by.iter().rev().enumerate() {
            let skip = if byte_index == 0 { 4 } else { 0 };
            for i in (0..(8 - skip)).rev() {
                let bit = (byte >> i) & 1 == 1;
                acc = acc.doubles();
                if bit {
                    acc += *self;
                } else {
                    acc += zero;
                }
            }
        }
        acc
    }
}

impl Mul<Fr> for AffineNiels {
    type Output = Extended;
    fn mul(self, rhs: Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}

impl Mul<&Fr> for &AffineNiels {
    type Output = Extended;
    fn mul(self, rhs: &Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}

/// An extended point's Niels form, used by the variable-base ladder.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ExtendedNiels {
    pub(crate) y_plus_x: Fq,
    pub(crate) y_minus_x: Fq,
    pub(crate) z: Fq,
    pub(crate) t2d: Fq,
}

impl Default for ExtendedNiels {
    fn default() -> Self {
        ExtendedNiels::identity()
    }
}

impl ConditionallySelectable for ExtendedNiels {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ExtendedNiels {
            y_plus_x: Fq::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: Fq::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            z: Fq::conditional_select(&a.z, &b.z, choice),
            t2d: Fq::conditional_select(&a.t2d, &b.t2d, choice),
        }
    }
}

impl From<&Extended> for ExtendedNiels {
    fn from(extended: &Extended) -> Self {
        ExtendedNiels {
            y_plus_x: extended.y + extended.x,
            y_minus_x: extended.y - extended.x,
            z: extended.z,
            t2d: extended.t1 * extended.t2 * Fq::from_raw(EDWARDS_D2),
        }
    }
}

impl From<Extended> for ExtendedNiels {
    fn from(extended: Extended) -> Self {
        ExtendedNiels::from(&extended)
    }
}

impl ExtendedNiels {
    pub(crate) fn identity() -> Self {
        ExtendedNiels {
            y_plus_x: Fq::one(),
            y_minus_x: Fq::one(),
            z: Fq::one(),
            t2d: Fq::zero(),
        }
    }

    pub(crate) fn multiply(&self, by: &[u8; 32]) -> Extended {
        let zero = ExtendedNiels::identity();
        let mut acc = Extended::identity();

        for (byte_index, byte) in by.iter().rev().enumerate() {
            let skip = if byte_index == 0 { 4 } else { 0 };
            for i in (0..(8 - skip)).rev() {
                let bit = (byte >> i) & 1 == 1;
                acc = acc.doubles();
                if bit {
                    acc += *self;
                } else {
                    acc += zero;
                }
            }
        }
        acc
    }
}

impl Mul<Fr> for ExtendedNiels {
    type Output = Extended;
    fn mul(self, rhs: Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}

impl Mul<&Fr> for &ExtendedNiels {
    type Output = Extended;
    fn mul(self, rhs: &Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}
