//! Curve and twist constants for JubJub, as raw little-endian limb tuples.
//!
//! All values here are base-field (`Fq`) elements expressed as the four
//! `u64` limbs `bls12_381::Scalar::from_raw` expects, or scalar-field
//! (`Fr`) byte arrays. Nothing here is derived; each constant is taken
//! directly from the reference implementation's tables.

/// `-1` coefficient pair for JubJub's twisted Edwards equation
/// `-x^2 + y^2 = 1 + d x^2 y^2`, doubled for use in the unified addition
/// formulas (`EDWARDS_D2 = 2 * EDWARDS_D1`).
pub(crate) const EDWARDS_D1: [u64; 4] = [
    0x2a522455b974f6b0,
    0xfc6cc9ef0d9acab3,
    0x7a08fb94c27628d1,
    0x57f8f6a8fe0e262e,
];

pub(crate) const EDWARDS_D2: [u64; 4] = [
    0x54a448ac72e9ed5f,
    0xa51befdb1b373967,
    0xc0d81f217b4a799e,
    0x3c0445fed27ecf14,
];

/// The prime-order subgroup generator.
pub(crate) const GENERATOR_X: [u64; 4] = [
    0xc8cd898c547c71aa,
    0x1e77bad0b3564650,
    0x0b5183a649031ebe,
    0x4f54a483a3031a2c,
];

pub(crate) const GENERATOR_Y: [u64; 4] = [
    0x00000026ffffffd9,
    0x3e1c038b003ffc27,
    0x323016c688581730,
    0x56cb8254a901ea00,
];

/// A second, independently-chosen generator ("nums" = nothing-up-my-sleeve),
/// used where protocols need a second base point unrelated to `GENERATOR`.
pub(crate) const GENERATOR_NUMS_X: [u64; 4] = [
    0x51d37e7271c3e812,
    0xf3ad45392074aaa8,
    0x21bb2537c0cfbca7,
    0x0bb829228bf29c9c,
];

pub(crate) const GENERATOR_NUMS_Y: [u64; 4] = [
    0x36fba2bf0c68cf00,
    0xcd442b52d2b7f2ad,
    0xbe025c79f9f895d4,
    0x61e43e3f466dbd00,
];

/// The `z` coordinate shared by both generators' canonical `Extended`
/// embedding (`t1 = x`, `t2 = y` since `z` here is not 1).
pub(crate) const GENERATOR_EXTENDED_Z: [u64; 4] = [
    0x00000001fffffffe,
    0x5884b7fa00034802,
    0x998c4fefecbc4ff5,
    0x1824b159acc5056f,
];

/// Canonical little-endian encoding of the `Fr` modulus `r`, used by
/// ZIP-216-style range checks that compare raw bytes rather than limbs.
pub(crate) const FR_MODULUS_BYTES: [u8; 32] = [
    183, 44, 247, 214, 94, 14, 151, 208, 130, 16, 200, 204, 147, 32, 104, 166, 0, 59, 52, 1, 1,
    59, 103, 6, 169, 175, 51, 101, 234, 180, 125, 14,
];
