//! Affine `(x, y)` points on the JubJub curve, and their canonical
//! ZIP-216 byte encoding.

use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::constants::EDWARDS_D1;
use crate::extended::Extended;
use crate::Fq;

/// A point in affine coordinates. Cheap to compare and to serialize, but
/// every scalar multiplication first promotes to [`Extended`].
#[derive(Copy, Clone, Debug)]
pub struct Affine {
    pub(crate) x: Fq,
    pub(crate) y: Fq,
}

impl Default for Affine {
    fn default() -> Self {
        Affine::identity()
    }
}

impl ConstantTimeEq for Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for Affine {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Affine {}

impl ConditionallySelectable for Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Affine {
            x: Fq::conditional_select(&a.x, &b.x, choice),
            y: Fq::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl From<Extended> for Affine {
    fn from(extended: Extended) -> Self {
        Affine::from(&extended)
    }
}

impl From<&Extended> for Affine {
    fn from(extended: &Extended) -> Self {
        let z_inv = extended.z.invert().unwrap_or(Fq::zero());
        Affine {
            x: extended.x * z_inv,
            y: extended.y * z_inv,
        }
    }
}

impl Neg for Affine {
    type Output = Affine;
    fn neg(self) -> Affine {
        Affine {
            x: -self.x,
            y: self.y,
        }
    }
}

impl Affine {
    pub const BYTE_SIZE: usize = 32;

    /// The curve's neutral element, `(0, 1)`.
    pub fn identity() -> Self {
        Affine {
            x: Fq::zero(),
            y: Fq::one(),
        }
    }

    pub fn new(x: Fq, y: Fq) -> Self {
        Affine { x, y }
    }

    /// Recovers a point from its 32-byte ZIP-216 encoding: `y` little-endian
    /// with the top bit of the last byte carrying the sign of `x`.
    ///
    /// Rejects non-canonical encodings of the identity-adjacent case where
    /// `x = 0` and the sign bit is set (there are two byte strings that
    /// would otherwise decode to the same point).
    pub fn from_bytes(bytes: &[u8; Affine::BYTE_SIZE]) -> CtOption<Self> {
        let mut b = *bytes;
        let sign = b[31] >> 7;
        b[31] &= 0b0111_1111;

        Fq::from_bytes(&b).and_then(|y| {
            let d1 = Fq::from_raw(EDWARDS_D1);
            let y2 = y.square();
            let numerator = y2 - Fq::one();
            let denominator = (Fq::one() + d1 * y2).invert().unwrap_or(Fq::zero());
            let x2 = numerator * denominator;

            x2.sqrt().and_then(|candidate| {
                let flip_sign = ((candidate.to_bytes()[0] ^ sign) & 1) == 1;
                let x = if flip_sign { -candidate } else { candidate };
                let x_is_zero = bool::from(x.is_zero());

                CtOption::new(Affine { x, y }, Choice::from((!(x_is_zero && flip_sign)) as u8))
            })
        })
    }

    /// Canonical 32-byte little-endian encoding of `y`, with the sign of
    /// `x` folded into the top bit.
    pub fn to_bytes(&self) -> [u8; Affine::BYTE_SIZE] {
        let x_bytes = self.x.to_bytes();
        let mut bytes = self.y.to_bytes();
        bytes[31] |= x_bytes[0] << 7;
        bytes
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.x.is_zero()) && self.y == Fq::one()
    }

    pub fn is_small_order(&self) -> bool {
        Extended::from(self).is_small_order()
    }

    pub fn is_torsion_free(&self) -> bool {
        Extended::from(self).is_torsion_free()
    }

    pub fn is_prime_order(&self) -> bool {
        let extended = Extended::from(self);
        extended.is_torsion_free() && !extended.is_identity()
    }

    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        y2 - x2 == Fq::one() + Fq::from_raw(EDWARDS_D1) * x2 * y2
    }

    pub fn mul_by_cofactor(&self) -> Extended {
        Extended::from(self).mul_by_cofactor()
    }

    pub fn get_x(&self) -> Fq {
        self.x
    }

    pub fn get_y(&self) -> Fq {
        self.y
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Affine {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_support::serialize_bytes(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Affine {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: [u8; 32] = crate::serde_support::deserialize_bytes(deserializer)?;
        Option::from(Affine::from_bytes(&bytes))
            .ok_or_else(|| serde::de::Error::custom("point was not a canonical JubJub encoding"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_on_curve() {
        assert!(Affine::identity().is_on_curve());
        assert!(Affine::identity().is_identity());
    }

    #[test]
    fn identity_round_trips() {
        let bytes = Affine::identity().to_bytes();
        let back = Affine::from_bytes(&bytes).unwrap();
        assert_eq!(back, Affine::identity());
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(Extended::generator().to_affine().is_on_curve());
    }

    #[test]
    fn zip216_rejects_non_canonical_encodings() {
        const NON_CANONICAL_ENCODINGS: [[u8; 32]; 2] = [
            [
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x80,
            ],
            [
                0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0x02,
                0xa4, 0xbd, 0x53, 0x05, 0xd8, 0xa1, 0x09, 0x08, 0xd8, 0x39, 0x33, 0x48, 0x7d,
                0x9d, 0x29, 0x53, 0xa7, 0xed, 0xf3,
            ],
        ];

        for encoding in NON_CANONICAL_ENCODINGS {
            assert!(bool::from(Affine::from_bytes(&encoding).is_none()));
            let mut canonical = encoding;
            canonical[31] &= 0b0111_1111;
            assert!(bool::from(Affine::from_bytes(&canonical).is_some()));
        }
    }

    #[test]
    fn serialization_consistency() {
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
        let gen = full_generator.mul_by_cofactor();

        const EXPECTED: [[u8; 32]; 16] = [
            [
                203, 85, 12, 213, 56, 234, 12, 193, 19, 132, 128, 64, 142, 110, 170, 185, 179,
                108, 97, 63, 13, 211, 247, 120, 79, 219, 110, 234, 131, 123, 19, 215,
            ],
            [
                113, 154, 240, 230, 224, 198, 208, 170, 104, 15, 59, 126, 151, 222, 233, 195,
                203, 195, 167, 129, 89, 121, 240, 142, 51, 166, 64, 250, 184, 202, 154, 177,
            ],
            [
                197, 41, 93, 209, 203, 55, 164, 174, 88, 0, 90, 199, 1, 156, 149, 141, 240, 29,
                14, 82, 86, 225, 126, 129, 186, 157, 148, 162, 219, 51, 156, 199,
            ],
            [
                182, 117, 250, 241, 81, 196, 199, 227, 151, 74, 243, 17, 221, 97, 200, 139, 192,
                83, 231, 35, 214, 14, 95, 69, 130, 201, 4, 116, 177, 19, 179, 0,
            ],
            [
                118, 41, 29, 200, 60, 189, 119, 252, 78, 40, 230, 18, 208, 221, 38, 214, 176, 250,
                4, 10, 77, 101, 26, 216, 193, 198, 226, 84, 25, 177, 230, 185,
            ],
            [
                226, 189, 227, 208, 112, 117, 136, 98, 72, 38, 211, 167, 254, 82, 174, 113, 112,
                166, 138, 171, 166, 113, 52, 251, 129, 197, 138, 45, 195, 7, 61, 140,
            ],
            [
                38, 198, 156, 196, 146, 225, 55, 163, 138, 178, 157, 128, 115, 135, 204, 215, 0,
                33, 171, 20, 60, 32, 142, 209, 33, 233, 125, 146, 207, 12, 16, 24,
            ],
            [
                17, 187, 231, 83, 165, 36, 232, 184, 140, 205, 195, 252, 166, 85, 59, 86, 3, 226,
                211, 67, 179, 29, 238, 181, 102, 142, 58, 63, 57, 89, 174, 138,
            ],
            [
                210, 159, 80, 16, 181, 39, 221, 204, 224, 144, 145, 79, 54, 231, 8, 140, 142, 216,
                93, 190, 183, 116, 174, 63, 33, 242, 177, 118, 148, 40, 241, 203,
            ],
            [
                0, 143, 107, 102, 149, 187, 27, 124, 18, 10, 98, 28, 113, 123, 121, 185, 29, 152,
                14, 130, 149, 28, 87, 35, 135, 135, 153, 54, 112, 53, 54, 68,
            ],
            [
                178, 131, 85, 160, 214, 51, 208, 157, 196, 152, 247, 93, 202, 56, 81, 239, 155,
                122, 59, 188, 237, 253, 11, 169, 208, 236, 12, 4, 163, 211, 88, 97,
            ],
            [
                246, 194, 231, 195, 159, 101, 180, 133, 80, 21, 185, 220, 195, 115, 144, 12, 90,
                150, 44, 117, 8, 156, 168, 248, 206, 41, 60, 82, 67, 75, 57, 67,
            ],
            [
                212, 205, 171, 153, 113, 16, 194, 241, 224, 43, 177, 110, 190, 248, 22, 201, 208,
                166, 2, 83, 134, 130, 85, 129, 166, 136, 185, 191, 163, 38, 54, 10,
            ],
            [
                8, 60, 190, 39, 153, 222, 119, 23, 142, 237, 12, 110, 146, 9, 19, 219, 143, 64,
                161, 99, 199, 77, 39, 148, 70, 213, 246, 227, 150, 178, 237, 178,
            ],
            [
                11, 114, 217, 160, 101, 37, 100, 220, 56, 114, 42, 31, 138, 33, 84, 157, 214, 167,
                73, 233, 115, 81, 124, 134, 15, 31, 181, 60, 184, 130, 175, 159,
            ],
            [
                141, 238, 235, 202, 241, 32, 210, 10, 127, 230, 54, 31, 146, 80, 247, 9, 107, 124,
                0, 26, 203, 16, 237, 34, 214, 147, 133, 15, 29, 236, 37, 88,
            ],
        ];

        let mut p = gen;
        for expected in EXPECTED {
            assert!(p.is_on_curve());
            let affine = p.to_affine();
            let serialized = affine.to_bytes();
            let deserialized = Affine::from_bytes(&serialized).unwrap();
            assert_eq!(affine, deserialized);
            assert_eq!(expected, serialized);
            p += gen;
        }
    }
}
