use crate::game::bank::Question;


#[derive(Clone, Debug, PartialEq)]
pub struct GuessResult {
    pub guess: i64,
    pub correct_answer: i64,
    pub points_earned: u32,
    pub accuracy_percentage: f64,
    pub lost_life: bool,
    pub guessed_too_low: bool,
}

impl GuessResult {
    pub fn none() -> GuessResult {
        GuessResult {
            guess: 0,
            correct_answer: 0,
            points_earned: 0,
            accuracy_percentage: 0.0,
            lost_life: false,
            guessed_too_low: false,
        }
    }
}

pub fn score_guess(question: &Question, guess: i64, current_year: i32) -> GuessResult {
    if question.is_year_question {
        score_year_guess(question.correct_answer, guess, current_year)
    } else {
        score_magnitude_guess(question.correct_answer, guess)
    }
}

// Year questions are scored against the window between the correct year and
// the current year, capped at 100 years forward. Guessing too early is always
// a miss; guessing late is forgiven up to half the window.
fn score_year_guess(correct_answer: i64, guess: i64, current_year: i32) -> GuessResult {
    let max_year = (current_year as i64).min(correct_answer + 100);
    let total_range = max_year - correct_answer;
    if total_range <= 0 {
        return degenerate_result(correct_answer, guess);
    }
    let total_range = total_range as f64;

    let guessed_too_low = guess < correct_answer;
    let offset = (guess - correct_answer) as f64 / total_range;
    let accuracy_percentage = (1.0 - offset.abs()) * 100.0;
    let lost_life = guessed_too_low || offset >= 0.5;
    let points_earned = if guessed_too_low || offset >= 0.5 {
        0
    } else {
        (100.0 * (-5.0 * offset).exp()).round() as u32
    };

    GuessResult {
        guess,
        correct_answer,
        points_earned,
        accuracy_percentage,
        lost_life,
        guessed_too_low,
    }
}

fn score_magnitude_guess(correct_answer: i64, guess: i64) -> GuessResult {
    if correct_answer <= 0 {
        return degenerate_result(correct_answer, guess);
    }

    let guessed_too_low = guess < correct_answer;
    let percentage_diff = (guess - correct_answer).abs() as f64 / correct_answer as f64;
    let accuracy_percentage = (1.0 - percentage_diff) * 100.0;
    // A guess exactly 20% high keeps its life but earns nothing.
    let lost_life = guessed_too_low || percentage_diff > 0.2;
    let points_earned = if guessed_too_low || percentage_diff >= 0.2 {
        0
    } else {
        (100.0 * (-25.0 * percentage_diff).exp()).round() as u32
    };

    GuessResult {
        guess,
        correct_answer,
        points_earned,
        accuracy_percentage,
        lost_life,
        guessed_too_low,
    }
}

// Fallback when the scoring denominator collapses (answer of zero, or a year
// at or past the current year): only an exact guess counts.
fn degenerate_result(correct_answer: i64, guess: i64) -> GuessResult {
    let exact = guess == correct_answer;
    GuessResult {
        guess,
        correct_answer,
        points_earned: if exact { 100 } else { 0 },
        accuracy_percentage: if exact { 100.0 } else { 0.0 },
        lost_life: !exact,
        guessed_too_low: guess < correct_answer,
    }
}
