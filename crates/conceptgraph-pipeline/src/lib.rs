pub mod assembler;
pub mod extraction;
pub mod pipeline;
pub mod refinement;
pub mod relation_map;
pub mod simplify;
pub mod validator;
pub mod wordlists;

pub use assembler::assemble;
pub use extraction::{ConceptExtractor, RelationshipExtractor};
pub use pipeline::GraphPipeline;
pub use refinement::RefinementLoop;
pub use simplify::{format_label, simplify_label, LabelSimplifier};
pub use validator::validate;
