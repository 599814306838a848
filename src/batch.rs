//! Montgomery's trick for normalizing many points to affine coordinates
//! with a single field inversion.

use crate::affine::Affine;
use crate::extended::Extended;
use crate::Fq;

/// Converts `points` to affine form using one [`Fq::invert`] call instead
/// of one per point.
///
/// Each point's `z` is accumulated into a running product; after a single
/// inversion of the total, the running product (scanned in reverse) hands
/// back each individual `z^{-1}`.
pub fn batch_normalize(points: &[Extended]) -> Vec<Affine> {
    let mut scratch: Vec<Fq> = Vec::with_capacity(points.len());

    let mut acc = Fq::one();
    for p in points {
        scratch.push(acc);
        acc *= p.get_z();
    }

    acc = acc.invert().unwrap_or(Fq::zero());

    let mut result = vec![Affine::identity(); points.len()];
    for ((p, prefix), out) in points.iter().zip(scratch.iter()).zip(result.iter_mut()).rev() {
        let temp = *prefix * acc;
        acc *= p.get_z();
        *out = Affine::new(p.get_x() * temp, p.get_y() * temp);
    }

    result
}
