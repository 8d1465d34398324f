pub mod helpers;
pub mod logger;

pub use helpers::content_type_for;
pub use logger::init_tracing;
