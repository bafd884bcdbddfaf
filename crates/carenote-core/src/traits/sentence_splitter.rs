/// Splits raw note text into ordered sentence units.
pub trait ISentenceSplitter: Send + Sync {
    /// Sentences in source order with original casing preserved.
    fn split(&self, text: &str) -> Vec<String>;
}
