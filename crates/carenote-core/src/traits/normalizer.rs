/// Text canonicalization used for equality and signature comparisons.
pub trait INormalizer: Send + Sync {
    /// Canonical form of `text`. Must be idempotent.
    fn normalize(&self, text: &str) -> String;
}
