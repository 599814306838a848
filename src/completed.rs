//! The intermediate four-coordinate result of an addition or doubling,
//! before it is projected back into [`Extended`](crate::Extended) form.

use crate::Fq;

/// `(x, y, z, t)` such that the corresponding extended point is
/// `(x*t, y*z, z*t)` with `t1 = x`, `t2 = y`.
///
/// Addition and doubling formulas land here first because the four
/// components fall out of the twisted Edwards group law as independent
/// products; only one further multiplication per coordinate is needed to
/// reach extended form, rather than normalizing through affine.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Completed {
    pub(crate) x: Fq,
    pub(crate) y: Fq,
    pub(crate) z: Fq,
    pub(crate) t: Fq,
}
