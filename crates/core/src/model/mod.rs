mod config;
mod question;

pub use config::{ConfigError, Operation, PracticeConfig, MAX_ANCHOR};
pub use question::{AnsweredQuestion, Question};
