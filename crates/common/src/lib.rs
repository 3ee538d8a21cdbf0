pub mod error;
pub mod types;

pub use error::{HerbauthError, HerbauthResult};
pub use types::ServiceInfo;
