use rand::Rng;
use serde::de;
use serde::{Deserialize, Deserializer};

fn int_from_grouped_digits<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let digits: String = text
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    digits.parse().map_err(|_| {
        de::Error::invalid_value(
            de::Unexpected::Str(&text),
            &"an integer, thousands separators allowed",
        )
    })
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub fact: String,
    #[serde(deserialize_with = "int_from_grouped_digits")]
    pub value: i64,
    pub unit: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuessRange {
    pub lower: f64,
    pub upper: f64,
}

impl GuessRange {
    fn ordered(a: f64, b: f64) -> GuessRange {
        GuessRange {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[derive(Clone, Debug)]
pub struct Question {
    pub id: u64,
    pub text: String,
    pub correct_answer: i64,
    pub units: String,
    pub is_year_question: bool,
    pub proposed_value: i64,
    pub range: GuessRange,
}

impl Question {
    pub fn from_raw<R: Rng + ?Sized>(
        raw: RawQuestion,
        id: u64,
        current_year: i32,
        rng: &mut R,
    ) -> Question {
        let is_year_question = raw.unit.trim().eq_ignore_ascii_case("year");
        let range = if is_year_question {
            year_range(raw.value, current_year, rng)
        } else {
            magnitude_range(raw.value, rng)
        };
        let proposed_value = propose_within(&range, rng);
        Question {
            id,
            text: raw.fact,
            correct_answer: raw.value,
            units: raw.unit,
            is_year_question,
            proposed_value,
            range,
        }
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Question {}

fn year_range<R: Rng + ?Sized>(correct_answer: i64, current_year: i32, rng: &mut R) -> GuessRange {
    let correct = correct_answer as f64;
    let event_age = (current_year as i64 - correct_answer).max(10) as f64;
    let range_size = event_age * rng.gen_range(0.6..=1.0);
    let max_value = (current_year as f64).min(correct + 0.7 * range_size);
    let min_value = 1.0_f64.max(correct - 0.3 * range_size);
    GuessRange::ordered(min_value, max_value)
}

fn magnitude_range<R: Rng + ?Sized>(correct_answer: i64, rng: &mut R) -> GuessRange {
    let correct = correct_answer as f64;
    let range_size = (correct * rng.gen_range(0.6..=0.8)).max(10.0);
    GuessRange::ordered(1.0_f64.max(correct - range_size), correct + range_size)
}

// The proposal must land away from the range edges so that both "higher" and
// "lower" stay plausible: draw from the middle 60% of the range.
fn propose_within<R: Rng + ?Sized>(range: &GuessRange, rng: &mut R) -> i64 {
    let margin = 0.2 * range.width();
    let proposed = rng.gen_range((range.lower + margin)..=(range.upper - margin));
    // Rounding can nudge the proposal past a fractional bound; keep it inside.
    let lo = range.lower.ceil() as i64;
    let hi = range.upper.floor() as i64;
    (proposed.round() as i64).clamp(lo.min(hi), hi.max(lo))
}
