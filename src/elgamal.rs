//! Lifted ElGamal encryption over the JubJub prime-order subgroup.
//!
//! A plaintext `m` is lifted to `m * G` before encryption, so the scheme
//! is additively (and, via repeated addition, scalar-multiplicatively)
//! homomorphic in the group exponent rather than in `m` itself: recovering
//! `m` from a decrypted `m * G` requires an additional discrete-log step
//! the caller is responsible for (small-`m` brute force, baby-step
//! giant-step, …).

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use subtle::CtOption;

use crate::affine::Affine;
use crate::extended::Extended;
use crate::fr::Fr;

/// An ElGamal ciphertext `(gamma, delta) = (r*gen, msg + r*pub)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    gamma: Extended,
    delta: Extended,
}

impl Cipher {
    pub const BYTE_SIZE: usize = 64;

    pub fn new(gamma: Extended, delta: Extended) -> Self {
        Cipher { gamma, delta }
    }

    /// Encrypts `msg` (already lifted onto the curve, e.g. `m * generator`)
    /// under recipient public key `public = sec_recipient * gen`, using
    /// fresh per-encryption randomness `sec`.
    pub fn encrypt(sec: &Fr, public: &Extended, gen: &Extended, msg: &Extended) -> Self {
        let gamma = *gen * *sec;
        let delta = *msg + *public * *sec;
        Cipher { gamma, delta }
    }

    /// Recovers the lifted plaintext `msg = delta - sec * gamma`.
    pub fn decrypt(&self, sec: &Fr) -> Extended {
        self.delta - self.gamma * *sec
    }

    pub fn to_bytes(&self) -> [u8; Cipher::BYTE_SIZE] {
        let mut bytes = [0u8; Cipher::BYTE_SIZE];
        bytes[0..32].copy_from_slice(&self.gamma.to_affine().to_bytes());
        bytes[32..64].copy_from_slice(&self.delta.to_affine().to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; Cipher::BYTE_SIZE]) -> CtOption<Self> {
        let mut gamma_bytes = [0u8; 32];
        let mut delta_bytes = [0u8; 32];
        gamma_bytes.copy_from_slice(&bytes[0..32]);
        delta_bytes.copy_from_slice(&bytes[32..64]);

        Affine::from_bytes(&gamma_bytes).and_then(|gamma| {
            Affine::from_bytes(&delta_bytes).and_then(|delta| {
                CtOption::new(
                    Cipher {
                        gamma: Extended::from(gamma),
                        delta: Extended::from(delta),
                    },
                    subtle::Choice::from(1),
                )
            })
        })
    }

    pub fn get_gamma(&self) -> Extended {
        self.gamma
    }

    pub fn get_delta(&self) -> Extended {
        self.delta
    }
}

impl Add for Cipher {
    type Output = Cipher;
    fn add(self, rhs: Cipher) -> Cipher {
        Cipher {
            gamma: self.gamma + rhs.gamma,
            delta: self.delta + rhs.delta,
        }
    }
}

impl AddAssign for Cipher {
    fn add_assign(&mut self, rhs: Cipher) {
        *self = *self + rhs;
    }
}

impl Sub for Cipher {
    type Output = Cipher;
    fn sub(self, rhs: Cipher) -> Cipher {
        Cipher {
            gamma: self.gamma - rhs.gamma,
            delta: self.delta - rhs.delta,
        }
    }
}

impl SubAssign for Cipher {
    fn sub_assign(&mut self, rhs: Cipher) {
        *self = *self - rhs;
    }
}

impl Mul<Fr> for Cipher {
    type Output = Cipher;
    fn mul(self, rhs: Fr) -> Cipher {
        Cipher {
            gamma: self.gamma * rhs,
            delta: self.delta * rhs,
        }
    }
}

impl MulAssign<Fr> for Cipher {
    fn mul_assign(&mut self, rhs: Fr) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cipher {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_support::serialize_bytes(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cipher {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: [u8; 64] = crate::serde_support::deserialize_bytes(deserializer)?;
        Option::from(Cipher::from_bytes(&bytes))
            .ok_or_else(|| serde::de::Error::custom("ciphertext contained a non-canonical point"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    fn generate() -> (Fr, Extended, Fr, Extended) {
        let a = Fr::random(OsRng);
        let b = Fr::random(OsRng);
        let a_g = Extended::generator() * a;
        let b_g = Extended::generator() * b;
        (a, a_g, b, b_g)
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let (a, _, b, b_g) = generate();
        let m = Fr::random(OsRng);
        let m_g = Extended::generator() * m;

        let cipher = Cipher::encrypt(&a, &b_g, &Extended::generator(), &m_g);
        assert_eq!(cipher.decrypt(&b), m_g);
    }

    #[test]
    fn decrypt_with_wrong_key_fails() {
        let (a, _, b, b_g) = generate();
        let m = Fr::random(OsRng);
        let m_g = Extended::generator() * m;

        let cipher = Cipher::encrypt(&a, &b_g, &Extended::generator(), &m_g);
        let wrong_key = b - Fr::one();
        assert_ne!(cipher.decrypt(&wrong_key), m_g);
    }

    #[test]
    fn homomorphic_add() {
        let (a, _, b, b_g) = generate();
        let gen = Extended::generator();
        let m: [Fr; 4] = [
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
        ];
        let m_g: [Extended; 4] = [gen * m[0], gen * m[1], gen * m[2], gen * m[3]];

        let expected = gen * (m[0] + m[1] + m[2] + m[3]);

        let cipher: [Cipher; 4] = [
            Cipher::encrypt(&a, &b_g, &gen, &m_g[0]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[1]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[2]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[3]),
        ];

        let mut homo = cipher[0] + cipher[1];
        homo += cipher[2];
        homo = homo + cipher[3];

        assert_eq!(homo.decrypt(&b), expected);
    }

    #[test]
    fn homomorphic_sub() {
        let (a, _, b, b_g) = generate();
        let gen = Extended::generator();
        let m: [Fr; 4] = [
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
        ];
        let m_g: [Extended; 4] = [gen * m[0], gen * m[1], gen * m[2], gen * m[3]];

        let expected = gen * (m[0] - m[1] - m[2] - m[3]);

        let cipher: [Cipher; 4] = [
            Cipher::encrypt(&a, &b_g, &gen, &m_g[0]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[1]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[2]),
            Cipher::encrypt(&a, &b_g, &gen, &m_g[3]),
        ];

        let mut homo = cipher[0] - cipher[1];
        homo -= cipher[2];
        homo = homo - cipher[3];

        assert_eq!(homo.decrypt(&b), expected);
    }

    #[test]
    fn homomorphic_scalar_mul() {
        let (a, _, b, b_g) = generate();
        let gen = Extended::generator();
        let m: [Fr; 4] = [
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
            Fr::random(OsRng),
        ];
        let m_g0 = gen * m[0];

        let expected = gen * (m[0] * m[1] * m[2] * m[3]);

        let cipher = Cipher::encrypt(&a, &b_g, &gen, &m_g0);

        let mut homo = cipher * m[1];
        homo *= m[2];
        homo = homo * m[3];

        assert_eq!(homo.decrypt(&b), expected);
    }

    #[test]
    fn serialize_round_trip() {
        let (a, _, b, b_g) = generate();
        let gen = Extended::generator();
        let m = Fr::random(OsRng);
        let m_g = gen * m;

        let cipher = Cipher::encrypt(&a, &b_g, &gen, &m_g);
        let bytes = cipher.to_bytes();
        let recovered = Cipher::from_bytes(&bytes).unwrap();

        assert_eq!(recovered.decrypt(&b), m_g);
    }
}
