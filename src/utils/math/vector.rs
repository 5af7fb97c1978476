use num::Float;

/// Dot product of two dense vectors.
///
/// # Arguments
/// * `a` - left vector
/// * `b` - right vector
///
/// # Returns
/// * `N` - sum over the shared index range
#[inline]
pub fn dot<N: Float>(a: &[N], b: &[N]) -> N {
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// L2 norm of a dense vector.
#[inline]
pub fn l2_norm<N: Float>(v: &[N]) -> N {
    v.iter()
        .fold(N::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Cosine similarity between two dense vectors.
/// cosθ = A・B / (|A||B|)
///
/// If either vector has zero norm the similarity is undefined; it is
/// defined here as zero so degenerate vectors never produce NaN.
#[inline]
pub fn cosine<N: Float>(a: &[N], b: &[N]) -> N {
    let denom = l2_norm(a) * l2_norm(b);
    if denom == N::zero() {
        return N::zero();
    }
    dot(a, b) / denom
}

/// Pairwise division of two dense vectors.
///
/// The result is truncated to the shorter operand, and any quotient
/// with a zero denominator is defined as zero instead of NaN/Inf.
#[inline]
pub fn div_pairwise<N: Float>(a: &[N], b: &[N]) -> Vec<N> {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| if y == N::zero() { N::zero() } else { x / y })
        .collect()
}
