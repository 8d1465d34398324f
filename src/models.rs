pub mod analyze_result;
pub mod credentials;
pub mod status_response;

pub use analyze_result::*;
pub use credentials::Credentials;
pub use status_response::StatusResponse;
