type Vector = [f32; 3];

pub fn subtract_vectors(a: &Vector, b: &Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

// < aybz - azby, azbx - axbz, axby - aybx >
pub fn cross_product(a: &Vector, b: &Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn dot_product(a: &Vector, b: &Vector) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn normalize_vector(v: &Vector) -> Vector {
    let magnitude = dot_product(v, v).sqrt();

    // a zero vector has no direction, leave it alone instead of filling it with NaN
    if magnitude == 0.0 {
        return *v;
    }

    [v[0] / magnitude, v[1] / magnitude, v[2] / magnitude]
}
