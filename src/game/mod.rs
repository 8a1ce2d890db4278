use anyhow::*;
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod bank;
pub mod pool;
pub mod scoring;


use crate::game::bank::{Question, QuestionBank};
use crate::game::pool::Pool;
use crate::game::scoring::{score_guess, GuessResult};
use crate::storage::HighScoreStore;

pub const STARTING_LIVES: u8 = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GamePhase {
    Home,
    Playing,
}

pub struct GameSession<S: HighScoreStore> {
    phase: GamePhase,
    lives: u8,
    score: u32,
    high_score: u32,
    is_new_high_score: bool,
    current_question: Option<Question>,
    pool: Pool,
    store: S,
    rng: StdRng,
    current_year: i32,
}

impl<S: HighScoreStore> GameSession<S> {
    pub fn new(bank: QuestionBank, store: S) -> GameSession<S> {
        GameSession::with_rng(bank, store, StdRng::from_entropy())
    }

    pub fn with_seed(bank: QuestionBank, store: S, seed: u64) -> GameSession<S> {
        GameSession::with_rng(bank, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bank: QuestionBank, store: S, rng: StdRng) -> GameSession<S> {
        let high_score = store.load().unwrap_or(0);
        GameSession {
            phase: GamePhase::Home,
            lives: STARTING_LIVES,
            score: 0,
            high_score,
            is_new_high_score: false,
            current_question: None,
            pool: Pool::new(bank),
            store,
            rng,
            current_year: chrono::Local::now().year(),
        }
    }

    pub fn start_new_game(&mut self) {
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.is_new_high_score = false;
        // An empty bank leaves current_question unset; the caller presents
        // that state rather than the engine failing.
        self.current_question = self.pool.draw(&mut self.rng);
        self.phase = GamePhase::Playing;
    }

    pub fn next_question(&mut self) -> Result<()> {
        if self.lives == 0 {
            return Err(anyhow!("Cannot draw a question after the game is over"));
        }
        self.current_question = self.pool.draw(&mut self.rng);
        Ok(())
    }

    pub fn submit_guess(&mut self, guess: i64) -> GuessResult {
        let question = match &self.current_question {
            Some(question) if self.lives > 0 => question,
            _ => return GuessResult::none(),
        };

        let result = score_guess(question, guess, self.current_year);
        if result.lost_life {
            self.lives -= 1;
            // The high score is compared against the score before this
            // guess's points are added; the losing guess never counts
            // toward it.
            if self.lives == 0 && self.score > self.high_score {
                self.high_score = self.score;
                self.is_new_high_score = true;
                if let Err(e) = self.store.save(self.high_score) {
                    eprintln!("Could not persist high score: {}", e);
                }
            }
        }
        self.score += result.points_earned;

        result
    }

    pub fn go_to_home(&mut self) {
        self.phase = GamePhase::Home;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_high_score(&self) -> bool {
        self.is_new_high_score
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }
}
