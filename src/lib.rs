//! JubJub curve arithmetic and lifted ElGamal encryption.
//!
//! JubJub is a twisted Edwards curve defined over the BLS12-381 scalar
//! field (`Fq`, supplied by the [`bls12_381`] crate) with a 252-bit prime
//! order subgroup of order `r` (`Fr`, implemented by this crate). Points
//! are represented in [`Affine`], [`Extended`], and two "Niels" forms
//! optimized for the mixed-addition formulas the scalar multiplication
//! ladder uses; [`batch_normalize`] converts many [`Extended`] points to
//! [`Affine`] with a single field inversion.
//!
//! [`elgamal::Cipher`] implements a lifted ElGamal scheme on top of the
//! prime-order subgroup: plaintexts are lifted onto the curve before
//! encryption, which makes the ciphertext homomorphic under point
//! addition (and, by repeated addition, scalar multiplication) in the
//! group exponent.
//!
//! This crate makes no constant-time guarantee: the reference algorithms
//! branch on scalar and point data the way the original implementation
//! does. [`subtle`] types are used at API seams (equality, conditional
//! selection, fallible decoding) as an additional, opt-in safer surface,
//! not as a proof of constant-time execution.

#![forbid(unsafe_code)]

mod affine;
mod batch;
mod completed;
mod constants;
mod elgamal;
mod extended;
mod fr;
mod niels;
#[cfg(feature = "serde")]
mod serde_support;
mod util;

pub use affine::Affine;
pub use batch::batch_normalize;
pub use elgamal::Cipher;
pub use extended::Extended;
pub use fr::Fr;

/// The JubJub base field: BLS12-381's scalar field, supplied by the
/// [`bls12_381`] crate rather than reimplemented here.
pub type Fq = bls12_381::Scalar;
