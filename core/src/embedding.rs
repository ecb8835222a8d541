/// A fixed-length text embedding. Backends produce unit-length vectors, or
/// the all-zero sentinel when a label has no representation. Dimensionality
/// is chosen by the backend, not by the core.
pub type Embedding = Vec<f64>;

/// Maps a text label to an embedding. Must be deterministic for a fixed
/// label and fixed underlying model.
pub trait TextEmbedder {
    fn embed(&self, label: &str) -> Embedding;

    /// Batch variant, behaviorally identical to embedding each label
    /// independently. Backends with real batch inference should override
    /// this for throughput.
    fn embed_batch(&self, labels: &[String]) -> Vec<Embedding> {
        labels.iter().map(|label| self.embed(label)).collect()
    }
}

/// True for the "could not embed this label" sentinel.
pub fn is_zero_vector(embedding: &[f64]) -> bool {
    embedding.iter().all(|&component| component == 0.0)
}
