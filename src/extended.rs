//! Extended twisted-Edwards coordinates `(x, y, z, t1, t2)` with
//! `t1 * t2 = x * y / z`. This is the representation scalar
//! multiplication and the bulk of point arithmetic is done in.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::affine::Affine;
use crate::completed::Completed;
use crate::constants::{
    FR_MODULUS_BYTES, GENERATOR_EXTENDED_Z, GENERATOR_NUMS_X, GENERATOR_NUMS_Y, GENERATOR_X,
    GENERATOR_Y,
};
use crate::niels::{AffineNiels, ExtendedNiels};
use crate::Fq;
use crate::Fr;

/// A JubJub point in extended projective coordinates.
#[derive(Copy, Clone, Debug)]
pub struct Extended {
    pub(crate) x: Fq,
    pub(crate) y: Fq,
    pub(crate) z: Fq,
    pub(crate) t1: Fq,
    pub(crate) t2: Fq,
}

impl Default for Extended {
    fn default() -> Self {
        Extended::identity()
    }
}

impl ConstantTimeEq for Extended {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z)) & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl PartialEq for Extended {
    fn eq(&self, other: &Self) -> bool {
        (self.x * other.z == other.x * self.z) && (self.y * other.z == other.y * self.z)
    }
}

impl Eq for Extended {}

impl ConditionallySelectable for Extended {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Extended {
            x: Fq::conditional_select(&a.x, &b.x, choice),
            y: Fq::conditional_select(&a.y, &b.y, choice),
            z: Fq::conditional_select(&a.z, &b.z, choice),
            t1: Fq::conditional_select(&a.t1, &b.t1, choice),
            t2: Fq::conditional_select(&a.t2, &b.t2, choice),
        }
    }
}

impl From<&Affine> for Extended {
    fn from(affine: &Affine) -> Self {
        Extended {
            x: affine.x,
            y: affine.y,
            z: Fq::one(),
            t1: affine.x,
            t2: affine.y,
        }
    }
}

impl From<Affine> for Extended {
    fn from(affine: Affine) -> Self {
        Extended::from(&affine)
    }
}

impl From<Completed> for Extended {
    fn from(c: Completed) -> Self {
        Extended {
            x: c.x * c.t,
            y: c.y * c.z,
            z: c.z * c.t,
            t1: c.x,
            t2: c.y,
        }
    }
}

impl Neg for Extended {
    type Output = Extended;
    fn neg(self) -> Extended {
        Extended {
            x: -self.x,
            y: self.y,
            z: self.z,
            t1: -self.t1,
            t2: self.t2,
        }
    }
}

impl Extended {
    /// The neutral element, `(0, 1, 1, 0, 0)`.
    pub fn identity() -> Self {
        Extended {
            x: Fq::zero(),
            y: Fq::one(),
            z: Fq::one(),
            t1: Fq::zero(),
            t2: Fq::zero(),
        }
    }

    /// The standard prime-order-subgroup generator.
    pub fn generator() -> Self {
        Extended {
            x: Fq::from_raw(GENERATOR_X),
            y: Fq::from_raw(GENERATOR_Y),
            z: Fq::from_raw(GENERATOR_EXTENDED_Z),
            t1: Fq::from_raw(GENERATOR_X),
            t2: Fq::from_raw(GENERATOR_Y),
        }
    }

    /// A second, nothing-up-my-sleeve generator, independent of
    /// [`Extended::generator`].
    pub fn generator_nums() -> Self {
        Extended {
            x: Fq::from_raw(GENERATOR_NUMS_X),
            y: Fq::from_raw(GENERATOR_NUMS_Y),
            z: Fq::from_raw(GENERATOR_EXTENDED_Z),
            t1: Fq::from_raw(GENERATOR_NUMS_X),
            t2: Fq::from_raw(GENERATOR_NUMS_Y),
        }
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.x.is_zero()) && self.y == self.z
    }

    pub fn is_small_order(&self) -> bool {
        self.doubles().doubles().x.is_zero().into()
    }

    pub fn is_torsion_free(&self) -> bool {
        self.multiply(&FR_MODULUS_BYTES).is_identity()
    }

    pub fn is_prime_order(&self) -> bool {
        self.is_torsion_free() && !self.is_identity()
    }

    pub fn is_on_curve(&self) -> bool {
        let affine = Affine::from(self);
        self.z != Fq::zero()
            && affine.is_on_curve()
            && affine.x * affine.y * self.z == self.t1 * self.t2
    }

    pub fn to_affine(&self) -> Affine {
        Affine::from(self)
    }

    pub fn to_hash_inputs(&self) -> (Fq, Fq) {
        let p = self.to_affine();
        (p.get_x(), p.get_y())
    }

    pub fn mul_by_cofactor(&self) -> Extended {
        self.doubles().doubles().doubles()
    }

    pub fn doubles(&self) -> Extended {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz2 = self.z.square().double();
        let xy2 = (self.x + self.y).square();
        let yy_plus_xx = yy + xx;
        let yy_minus_xx = yy - xx;

        Extended::from(Completed {
            x: xy2 - yy_plus_xx,
            y: yy_plus_xx,
            z: yy_minus_xx,
            t: zz2 - yy_minus_xx,
        })
    }

    /// Performs the 252-bit double-and-add ladder against a little-endian
    /// byte string (typically [`Fr::to_bytes`]). The top four bits of the
    /// most significant byte are skipped: every valid scalar is smaller
    /// than `2^252`.
    pub fn multiply(&self, by: &[u8; 32]) -> Extended {
        ExtendedNiels::from(self).multiply(by)
    }

    pub fn get_x(&self) -> Fq {
        self.x
    }

    pub fn get_y(&self) -> Fq {
        self.y
    }

    pub fn get_z(&self) -> Fq {
        self.z
    }

    pub fn get_t1(&self) -> Fq {
        self.t1
    }

    pub fn get_t2(&self) -> Fq {
        self.t2
    }
}

fn add_extended_niels(lhs: &Extended, rhs: &ExtendedNiels) -> Extended {
    let a = (lhs.y - lhs.x) * rhs.y_minus_x;
    let b = (lhs.y + lhs.x) * rhs.y_plus_x;
    let c = lhs.t1 * lhs.t2 * rhs.t2d;
    let d = (lhs.z * rhs.z).double();

    Extended::from(Completed {
        x: b - a,
        y: b + a,
        z: d + c,
        t: d - c,
    })
}

fn sub_extended_niels(lhs: &Extended, rhs: &ExtendedNiels) -> Extended {
    let a = (lhs.y - lhs.x) * rhs.y_plus_x;
    let b = (lhs.y + lhs.x) * rhs.y_minus_x;
    let c = lhs.t1 * lhs.t2 * rhs.t2d;
    let d = (lhs.z * rhs.z).double();

    Extended::from(Completed {
        x: b - a,
        y: b + a,
        z: d - c,
        t: d + c,
    })
}

fn add_affine_niels(lhs: &Extended, rhs: &AffineNiels) -> Extended {
    let a = (lhs.y - lhs.x) * rhs.y_minus_x;
    let b = (lhs.y + lhs.x) * rhs.y_plus_x;
    let c = lhs.t1 * lhs.t2 * rhs.t2d;
    let d = lhs.z.double();

    Extended::from(Completed {
        x: b - a,
        y: b + a,
        z: d + c,
        t: d - c,
    })
}

fn sub_affine_niels(lhs: &Extended, rhs: &AffineNiels) -> Extended {
    let a = (lhs.y - lhs.x) * rhs.y_plus_x;
    let b = (lhs.y + lhs.x) * rhs.y_minus_x;
    let c = lhs.t1 * lhs.t2 * rhs.t2d;
    let d = lhs.z.double();

    Extended::from(Completed {
        x: b - a,
        y: b + a,
        z: d - c,
        t: d + c,
    })
}

macro_rules! impl_extended_binop {
    ($rhs:ty, $add_fn:ident, $sub_fn:ident) => {
        impl Add<$rhs> for Extended {
            type Output = Extended;
            fn add(self, rhs: $rhs) -> Extended {
                $add_fn(&self, &rhs.into())
            }
        }
        impl Add<&$rhs> for &Extended {
            type Output = Extended;
            fn add(self, rhs: &$rhs) -> Extended {
                $add_fn(self, &(*rhs).into())
            }
        }
        impl AddAssign<$rhs> for Extended {
            fn add_assign(&mut self, rhs: $rhs) {
                *self = $add_fn(self, &rhs.into());
            }
        }
        impl Sub<$rhs> for Extended {
            type Output = Extended;
            fn sub(self, rhs: $rhs) -> Extended {
                $sub_fn(&self, &rhs.into())
            }
        }
        impl Sub<&$rhs> for &Extended {
            type Output = Extended;
            fn sub(self, rhs: &$rhs) -> Extended {
                $sub_fn(self, &(*rhs).into())
            }
        }
        impl SubAssign<$rhs> for Extended {
            fn sub_assign(&mut self, rhs: $rhs) {
                *self = $sub_fn(self, &rhs.into());
            }
        }
    };
}

impl_extended_binop!(ExtendedNiels, add_extended_niels, sub_extended_niels);
impl_extended_binop!(AffineNiels, add_affine_niels, sub_affine_niels);

impl Add<Extended> for Extended {
    type Output = Extended;
    fn add(self, rhs: Extended) -> Extended {
        add_extended_niels(&self, &ExtendedNiels::from(&rhs))
    }
}

impl AddAssign<Extended> for Extended {
    fn add_assign(&mut self, rhs: Extended) {
        *self = add_extended_niels(self, &ExtendedNiels::from(&rhs));
    }
}

impl Sub<Extended> for Extended {
    type Output = Extended;
    fn sub(self, rhs: Extended) -> Extended {
        sub_extended_niels(&self, &ExtendedNiels::from(&rhs))
    }
}

impl SubAssign<Extended> for Extended {
    fn sub_assign(&mut self, rhs: Extended) {
        *self = sub_extended_niels(self, &ExtendedNiels::from(&rhs));
    }
}

impl Add<Affine> for Extended {
    type Output = Extended;
    fn add(self, rhs: Affine) -> Extended {
        add_affine_niels(&self, &AffineNiels::from(&rhs))
    }
}

impl AddAssign<Affine> for Extended {
    fn add_assign(&mut self, rhs: Affine) {
        *self = add_affine_niels(self, &AffineNiels::from(&rhs));
    }
}

impl Sub<Affine> for Extended {
    type Output = Extended;
    fn sub(self, rhs: Affine) -> Extended {
        sub_affine_niels(&self, &AffineNiels::from(&rhs))
    }
}

impl SubAssign<Affine> for Extended {
    fn sub_assign(&mut self, rhs: Affine) {
        *self = sub_affine_niels(self, &AffineNiels::from(&rhs));
    }
}

impl core::ops::Mul<Fr> for Extended {
    type Output = Extended;
    fn mul(self, rhs: Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}

impl core::ops::Mul<&Fr> for &Extended {
    type Output = Extended;
    fn mul(self, rhs: &Fr) -> Extended {
        self.multiply(&rhs.to_bytes())
    }
}

impl core::ops::MulAssign<Fr> for Extended {
    fn mul_assign(&mut self, rhs: Fr) {
        *self = self.multiply(&rhs.to_bytes());
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Extended {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_support::serialize_bytes(&self.to_affine().to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Extended {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: [u8; 32] = crate::serde_support::deserialize_bytes(deserializer)?;
        let affine = Option::from(Affine::from_bytes(&bytes))
            .ok_or_else(|| serde::de::Error::custom("point was not a canonical JubJub encoding"))?;
        Ok(Extended::from(affine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn identity_is_identity() {
        assert!(Extended::identity().is_identity());
    }

    #[test]
    fn generator_is_on_curve_and_prime_order() {
        let g = Extended::generator();
        assert!(g.is_on_curve());
        assert!(g.is_prime_order());
        assert!(!g.is_small_order());
    }

    #[test]
    fn generator_nums_is_on_curve() {
        let g = Extended::generator_nums();
        assert!(g.is_on_curve());
        assert!(g.is_prime_order());
    }

    #[test]
    fn doubling_matches_addition() {
        let g = Extended::generator();
        assert_eq!(g.doubles(), g + g);
    }

    #[test]
    fn mul_consistency() {
        let g = Extended::generator();
        for _ in 0..20 {
            let a = Fr::random(OsRng);
            let b = Fr::random(OsRng);
            let lhs = g * (a * b);
            let rhs = (g * a) * b;
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn small_order_eight_torsion() {
        let identity = Extended::identity();
        assert!(identity.is_small_order());
    }

    #[test]
    fn batch_inversion_matches_individual() {
        let g = Extended::generator();
        let points = vec![g, g.doubles(), g.doubles().doubles()];
        let affine = crate::batch::batch_normalize(&points);
        for (p, a) in points.iter().zip(affine.iter()) {
            assert_eq!(&p.to_affine(), a);
        }
    }

    fn mul_consistency_point() -> Extended {
        let affine = Affine::new(
            Fq::from_raw([
                0x81c571e5d883cfb0,
                0x049f7a686f147029,
                0xf539c860bc3ea21f,
                0x4284715b7ccc8162,
            ]),
            Fq::from_raw([
                0xbf096275684bb8ca,
                0xc7ba245890af256d,
                0x59119f3e86380eb0,
                0x3793de182f9fb1d2,
            ]),
        );
        Extended::from(affine).mul_by_cofactor()
    }

    #[test]
    fn mul_consistency_fixed_vectors() {
        // These limbs are already in Montgomery form (mirroring the
        // reference implementation's raw-array `Fr` constructor, which
        // copies its argument directly rather than converting it).
        let a = Fr([
            0x21e61211d9934f2e,
            0xa52c058a693c3e07,
            0x9ccb77bfb12d6360,
            0x07df2470ec94398e,
        ]);
        let b = Fr([
            0x03336d1cbe19dbe0,
            0x0153618f6156a536,
            0x2604c9e1fc3c6b15,
            0x04ae581ceb028720,
        ]);
        let c = Fr([
            0xd7abf5bb24683f4c,
            0x9d7712cc274b7c03,
            0x973293db9683789f,
            0x0b677e29380a97a7,
        ]);
        assert_eq!(a * b, c);

        let p = mul_consistency_point();
        assert_eq!(p * c, (p * a) * b);

        // Mul implemented on ExtendedNiels.
        let p_extended_niels = ExtendedNiels::from(p);
        assert_eq!(p * c, (p_extended_niels * a) * b);
        assert_eq!(p_extended_niels * c, (p * a) * b);
        assert_eq!(p_extended_niels * c, (p_extended_niels * a) * b);

        // Mul implemented on AffineNiels.
        let p_affine_niels = AffineNiels::from(p.to_affine());
        assert_eq!(p * c, (p_affine_niels * a) * b);
        assert_eq!(p_affine_niels * c, (p * a) * b);
        assert_eq!(p_affine_niels * c, (p_affine_niels * a) * b);
    }

    #[test]
    fn eight_torsion_matches_reference() {
        let full_generator = Affine::new(
            Fq::from_raw([
                0x50c87a58c166eca5,
                0x8046fd74c0051afc,
                0x406355ee695b0493,
                0x0d5a8d931bdc7e0a,
            ]),
            Fq::from_raw([
                0x00000017ffffffe8,
                0x26389fb800276018,
                0x3293bf3f18d3bf80,
                0x21b85034193c413b,
            ]),
        );

        let g1 = Extended::from(full_generator);
        let g2 = g1.multiply(&FR_MODULUS_BYTES);

        assert!(!g1.is_small_order());
        assert!(g2.is_small_order());

        let expected = [
            Affine::new(
                Fq::from_raw([
                    0xad54905676840a17,
                    0x884a28f1a8cee9b4,
                    0xdfcc6227f79d2e0c,
                    0x45784f13df4a06a9,
                ]),
                Fq::from_raw([
                    0xdc2e8792ad17413b,
                    0x22a13f6d0d805e26,
                    0x87876d4df48e7492,
                    0x3e344d8cbceee813,
                ]),
            ),
            Affine::new(
                Fq::from_raw([
                    0x0c4fa98a55763050,
                    0x4c8ea2c29ff7a200,
                    0x649fca48e43b5ddf,
                    0x26c0c34dfc43f9d3,
                ]),
                Fq::zero(),
            ),
        ];

        let mut cur = g2;
        for affine in expected {
            assert_eq!(cur.to_affine(), affine);
            cur += g2;
        }
    }
}
