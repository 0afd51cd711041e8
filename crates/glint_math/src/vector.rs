//! Vector helpers that glam does not provide in the form the tracer needs.

use crate::Vec3;

/// Reflect `v` about the unit normal `n`.
///
/// `v - 2 (v . n) n`. The caller guarantees `n` is normalized.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
