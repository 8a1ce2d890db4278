use rand::Rng;

use crate::game::bank::{Question, QuestionBank};


pub struct Pool {
    bank: QuestionBank,
    unused: Vec<usize>,
}

impl Pool {
    pub fn new(bank: QuestionBank) -> Pool {
        let unused = (0..bank.len()).collect();
        Pool { bank, unused }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn remaining(&self) -> usize {
        self.unused.len()
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Question> {
        if self.bank.is_empty() {
            return None;
        }
        if self.unused.is_empty() {
            self.unused = (0..self.bank.len()).collect();
        }
        let slot = rng.gen_range(0..self.unused.len());
        let index = self.unused.swap_remove(slot);
        Some(self.bank.questions()[index].clone())
    }
}
