pub mod clients;
pub mod error;
pub mod layout;
pub mod models;
pub mod report;
pub mod utils;

pub use clients::{AnalyzeInput, AnalyzeOptions, DocumentIntelligenceClient, OutputContentFormat};
pub use error::AnalysisError;
pub use layout::words_in_line;
pub use models::{AnalyzeResult, Credentials};
pub use report::render_layout;
pub use utils::init_tracing;
