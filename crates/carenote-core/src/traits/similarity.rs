/// Bounded string similarity.
///
/// Implementations must be commutative, reflexive (`score(x, x) == 1.0`),
/// and total: `score("", "") == 1.0`, `score("", x) == 0.0` for non-empty `x`.
pub trait ISimilarity: Send + Sync {
    /// Similarity in `[0.0, 1.0]`.
    fn score(&self, a: &str, b: &str) -> f64;
}
