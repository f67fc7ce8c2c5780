//! Fixed RIASEC scoring.

use models::holland_question::{HollandCategory, LIKERT};
use models::holland_result::Scores;
use serde::Deserialize;

use crate::errors::ServiceError;

pub const MAX_ANSWER_VALUE: i64 = 4;

/// A submitted answer: either a Likert label or its numeric value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Value(i64),
    Label(String),
}

impl Answer {
    pub fn value(&self) -> Result<i32, ServiceError> {
        match self {
            Answer::Value(v) if (0..=MAX_ANSWER_VALUE).contains(v) => Ok(*v as i32),
            Answer::Value(v) => Err(ServiceError::validation(format!("answer value {v} is out of range 0..=4"))),
            Answer::Label(label) => {
                let label = label.trim();
                LIKERT
                    .iter()
                    .find(|(l, _)| *l == label)
                    .map(|(_, v)| *v)
                    .ok_or_else(|| ServiceError::validation(format!("unknown answer label '{label}'")))
            }
        }
    }
}

/// Sum answers per category.
pub fn tally(answers: impl IntoIterator<Item = (HollandCategory, i32)>) -> Scores {
    let mut scores = Scores::default();
    for (cat, v) in answers {
        scores.add(cat, v);
    }
    scores
}

/// The three highest categories; ties keep RIASEC order.
pub fn top_code(scores: &Scores) -> String {
    let mut ranked = HollandCategory::ORDER;
    // stable sort keeps canonical order among equal scores
    ranked.sort_by_key(|c| std::cmp::Reverse(scores.get(*c)));
    ranked.iter().take(3).map(|c| c.letter()).collect()
}

/// Profile codes to try, most specific first: `RIA`, `RI`, `R`.
pub fn profile_candidates(code: &str) -> Vec<String> {
    let letters: Vec<char> = code.chars().collect();
    (1..=letters.len()).rev().map(|n| letters[..n].iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use HollandCategory::*;

    #[test]
    fn labels_and_numbers_map_to_values() {
        assert_eq!(Answer::Label("Rất thích".into()).value().unwrap(), 4);
        assert_eq!(Answer::Label(" Bình thường ".into()).value().unwrap(), 2);
        assert_eq!(Answer::Value(0).value().unwrap(), 0);
        assert!(Answer::Value(5).value().is_err());
        assert!(Answer::Value(-1).value().is_err());
        assert!(Answer::Label("Yes".into()).value().is_err());
    }

    #[test]
    fn answers_deserialize_untagged() {
        let a: Vec<Answer> = serde_json::from_str(r#"[3, "Thích"]"#).unwrap();
        assert_eq!(a, vec![Answer::Value(3), Answer::Label("Thích".into())]);
    }

    #[test]
    fn top_code_breaks_ties_in_riasec_order() {
        let scores = tally([(S, 4), (E, 4), (I, 4), (C, 1)]);
        assert_eq!(top_code(&scores), "ISE");
        assert_eq!(top_code(&Scores::default()), "RIA");
        let scores = tally([(C, 3), (A, 2), (A, 2), (R, 1)]);
        assert_eq!(top_code(&scores), "ACR");
    }

    #[test]
    fn candidates_shrink_from_the_right() {
        assert_eq!(profile_candidates("SEC"), vec!["SEC", "SE", "S"]);
        assert_eq!(profile_candidates("R"), vec!["R"]);
    }
}
