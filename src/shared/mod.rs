pub mod error;
pub mod result;

pub use error::{CollectError, ExitCode};
pub use result::Result;
