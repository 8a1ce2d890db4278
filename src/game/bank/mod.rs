use rand::Rng;
use std::path::Path;

mod question;


pub use question::{GuessRange, Question, RawQuestion};

#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn load_from_path<R: Rng + ?Sized>(
        source: &Path,
        current_year: i32,
        rng: &mut R,
    ) -> QuestionBank {
        match std::fs::read(source) {
            Ok(bytes) => QuestionBank::from_csv(&decode(&bytes), current_year, rng),
            Err(e) => {
                eprintln!("Could not read question bank {}: {}", source.display(), e);
                QuestionBank::default()
            }
        }
    }

    pub fn from_csv<R: Rng + ?Sized>(content: &str, current_year: i32, rng: &mut R) -> QuestionBank {
        let mut questions = Vec::new();
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(_) => continue,
            };
            let record = match collapse_value_fields(&record) {
                Some(record) => record,
                None => continue,
            };
            match record.deserialize::<RawQuestion>(None) {
                Ok(raw) => {
                    let id = questions.len() as u64;
                    questions.push(Question::from_raw(raw, id, current_year, rng));
                }
                Err(_) => continue,
            }
        }
        QuestionBank { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

// An unquoted thousands separator splits the value across fields
// ("fact,29,029,feet"), so everything between the fact and the unit is one
// value column.
fn collapse_value_fields(record: &csv::StringRecord) -> Option<csv::StringRecord> {
    if record.len() < 3 {
        return None;
    }
    if record.len() == 3 {
        return Some(record.clone());
    }
    let value: String = record.iter().skip(1).take(record.len() - 2).collect();
    let mut collapsed = csv::StringRecord::new();
    collapsed.push_field(record.get(0).unwrap_or(""));
    collapsed.push_field(&value);
    collapsed.push_field(record.get(record.len() - 1).unwrap_or(""));
    Some(collapsed)
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        // Latin-1: every byte maps to the code point of the same value.
        Err(_) => bytes.iter().map(|b| *b as char).collect(),
    }
}
