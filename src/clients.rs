pub mod base;
pub mod document_intelligence;

pub use base::AnalyzeInput;
pub use document_intelligence::{AnalyzeOptions, DocumentIntelligenceClient, OutputContentFormat};
