//! Game engine for a higher-or-lower numeric estimation trivia game: question
//! bank loading, no-repeat question sampling, accuracy scoring and session
//! state, with a persisted high score. Presentation is up to the caller.

pub mod game;
pub mod storage;

pub use crate::game::bank::{GuessRange, Question, QuestionBank, RawQuestion};
pub use crate::game::scoring::GuessResult;
pub use crate::game::{GamePhase, GameSession, STARTING_LIVES};
pub use crate::storage::{FileHighScoreStore, HighScoreStore};
