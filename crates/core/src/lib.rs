#![forbid(unsafe_code)]

pub mod model;
pub mod results;
pub mod time;

pub use model::{
    AnsweredQuestion, ConfigError, Operation, PracticeConfig, Question,
};
pub use results::SessionResult;
pub use time::Clock;
