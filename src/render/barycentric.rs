use crate::{constants::BARYCENTRIC_EPSILON, vector::cross_product};

type Vector = [f32; 3];

/// Weights (u, v, w) of `p` against the triangle `a`, `b`, `c`, using only x and y.
///
/// The weights sum to 1 and are all non-negative when `p` lies inside.
/// A triangle with (near) zero projected area yields `[-1.0, 1.0, 1.0]`, which every
/// inside test rejects.
pub fn barycentric(a: &Vector, b: &Vector, c: &Vector, p: &Vector) -> Vector {
    // p = a + v * (b - a) + w * (c - a) solved as the cross product of the x and y rows
    let xs = [c[0] - a[0], b[0] - a[0], a[0] - p[0]];
    let ys = [c[1] - a[1], b[1] - a[1], a[1] - p[1]];
    let n = cross_product(&xs, &ys);

    // n[2] is twice the signed area of the projected triangle
    if n[2].abs() <= BARYCENTRIC_EPSILON {
        return [-1.0, 1.0, 1.0];
    }

    [1.0 - (n[0] + n[1]) / n[2], n[1] / n[2], n[0] / n[2]]
}

pub fn is_inside(weights: &Vector) -> bool {
    weights.iter().all(|&w| w >= 0.0)
}
