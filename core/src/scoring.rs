/// Relevance of a candidate embedding against the target embedding: the dot
/// product scaled by 100, rounded to 2 decimal places, absolute value. Both
/// vectors are unit length (or the zero sentinel), so the dot product is a
/// cosine similarity in [-1, 1]. The absolute value makes opposite and
/// identical labels score the same; existing runs depend on this, so it is
/// kept as-is.
pub fn relevance_score(target: &[f64], candidate: &[f64]) -> f64 {
    let dot: f64 = target
        .iter()
        .zip(candidate.iter())
        .map(|(a, b)| a * b)
        .sum();
    ((dot * 100.0 * 100.0).round() / 100.0).abs()
}

/// Combined frontier value: similarity penalized by path depth.
pub fn frontier_value(similarity: f64, hops: usize, depth_penalty: f64) -> f64 {
    similarity - depth_penalty * hops as f64
}
