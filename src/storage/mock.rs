use anyhow::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::storage::HighScoreStore;

// Shared-handle store: clones observe saves made through the session's copy.
#[derive(Clone, Default)]
pub struct MemoryHighScoreStore {
    high_score: Rc<RefCell<u32>>,
    saved: Rc<RefCell<Vec<u32>>>,
}

impl MemoryHighScoreStore {
    pub fn new() -> MemoryHighScoreStore {
        Default::default()
    }

    pub fn with_high_score(high_score: u32) -> MemoryHighScoreStore {
        let store = MemoryHighScoreStore::new();
        *store.high_score.borrow_mut() = high_score;
        store
    }

    pub fn saved_values(&self) -> Vec<u32> {
        self.saved.borrow().clone()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(*self.high_score.borrow())
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        *self.high_score.borrow_mut() = high_score;
        self.saved.borrow_mut().push(high_score);
        Ok(())
    }
}
