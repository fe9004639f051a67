pub mod collect_request;
pub mod collect_response;

pub use collect_request::{CollectConfig, CollectRequest};
pub use collect_response::CollectResponse;
