pub mod config;
pub mod events;
pub mod generate;
pub mod session;

pub use generate::{GenerationError, QuizSet};
pub use session::{GameSession, SessionEvent};
