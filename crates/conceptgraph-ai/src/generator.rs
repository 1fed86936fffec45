use async_trait::async_trait;

/// Result type for generation calls.
pub type GenerationResult<T> = anyhow::Result<T>;

/// The injected text-generation capability. Every pipeline component that
/// talks to a model receives an `Arc<dyn TextGenerator>` explicitly; there is
/// no ambient global handle, so tests substitute a deterministic stub.
///
/// Implementations own their retry policy. A returned error means retries are
/// exhausted; callers apply their component-local failure rule (propagate for
/// extraction, degrade to a fallback everywhere else) and never retry again.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;
}
