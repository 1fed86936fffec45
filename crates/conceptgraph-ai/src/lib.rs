pub mod generator;
pub mod provider;
pub mod recovery;

pub use generator::{GenerationResult, TextGenerator};
pub use provider::{CompletionClient, CompletionConfig};
pub use recovery::{recover_array, recover_object, strip_code_fences, Recovery};
