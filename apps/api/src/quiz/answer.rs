//! Answer letters and grading.
//!
//! Every question stores its correct answer as one of the four option
//! labels. Parsing submitted answers into [`AnswerLetter`] up front keeps
//! the comparison case-insensitive in exactly one place and rejects
//! anything outside A–D before it reaches the grader.

use std::fmt;
use std::str::FromStr;

/// One of the four option labels of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that is not a single letter in A–D.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAnswerLetter(pub String);

impl FromStr for AnswerLetter {
    type Err = InvalidAnswerLetter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(AnswerLetter::A),
            "B" | "b" => Ok(AnswerLetter::B),
            "C" | "c" => Ok(AnswerLetter::C),
            "D" | "d" => Ok(AnswerLetter::D),
            other => Err(InvalidAnswerLetter(other.to_string())),
        }
    }
}

/// Grades a submission against the stored correct letter.
pub fn is_correct(submitted: AnswerLetter, correct: AnswerLetter) -> bool {
    submitted == correct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b".parse::<AnswerLetter>().unwrap(), AnswerLetter::B);
        assert_eq!("B".parse::<AnswerLetter>().unwrap(), AnswerLetter::B);
        assert_eq!(" d ".parse::<AnswerLetter>().unwrap(), AnswerLetter::D);
    }

    #[test]
    fn test_parse_rejects_out_of_range_letters() {
        assert!("E".parse::<AnswerLetter>().is_err());
        assert!("AB".parse::<AnswerLetter>().is_err());
        assert!("".parse::<AnswerLetter>().is_err());
    }

    #[test]
    fn test_lowercase_submission_matches_uppercase_stored() {
        let submitted = "b".parse::<AnswerLetter>().unwrap();
        let stored = "B".parse::<AnswerLetter>().unwrap();
        assert!(is_correct(submitted, stored));
    }

    #[test]
    fn test_mismatch_is_incorrect() {
        let submitted = "A".parse::<AnswerLetter>().unwrap();
        let stored = "B".parse::<AnswerLetter>().unwrap();
        assert!(!is_correct(submitted, stored));
    }
}
