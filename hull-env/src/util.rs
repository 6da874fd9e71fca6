//! Array helpers shared by the wrappers.
use ndarray::{Array1, ArrayD};

/// Flattens an array to rank 1, in row-major element order.
pub fn ravel(arr: &ArrayD<f32>) -> ArrayD<f32> {
    Array1::from_iter(arr.iter().copied()).into_dyn()
}

/// Concatenates `n` copies of `arr`, flattened, into one rank-1 array.
pub fn tile(arr: &ArrayD<f32>, n: usize) -> ArrayD<f32> {
    let mut v = Vec::with_capacity(arr.len() * n);
    for _ in 0..n {
        v.extend(arr.iter().copied());
    }
    Array1::from(v).into_dyn()
}
