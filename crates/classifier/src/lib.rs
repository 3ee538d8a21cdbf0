pub mod config;
pub mod engine;
pub mod rasa;

pub use config::{AdulterationPolicy, ClassifierConfig};
pub use engine::{classify, Classification};
