use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full question row, including the correct answer and explanation.
/// Never serialized to quiz clients directly — see [`QuestionPrompt`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub profession_id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// The four labeled options as presented to the client.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

/// Client-facing view of a question: text and options only.
/// The correct answer and explanation stay server-side until the
/// answer is checked.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPrompt {
    pub id: i64,
    pub question: String,
    pub options: QuestionOptions,
}

impl From<Question> for QuestionPrompt {
    fn from(q: Question) -> Self {
        QuestionPrompt {
            id: q.id,
            question: q.question,
            options: QuestionOptions {
                a: q.option_a,
                b: q.option_b,
                c: q.option_c,
                d: q.option_d,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            id: 7,
            profession_id: 1,
            question: "Which vitamin is synthesized in the skin?".to_string(),
            option_a: "Vitamin A".to_string(),
            option_b: "Vitamin C".to_string(),
            option_c: "Vitamin D".to_string(),
            option_d: "Vitamin K".to_string(),
            correct_answer: "C".to_string(),
            explanation: Some("Vitamin D is produced on UV exposure.".to_string()),
        }
    }

    #[test]
    fn test_prompt_hides_answer_and_explanation() {
        let prompt = QuestionPrompt::from(sample_question());
        let json = serde_json::to_value(&prompt).unwrap();
        assert!(json.get("correct_answer").is_none());
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn test_prompt_labels_options_a_through_d() {
        let prompt = QuestionPrompt::from(sample_question());
        let json = serde_json::to_value(&prompt).unwrap();
        let options = json.get("options").unwrap();
        assert_eq!(options["A"], "Vitamin A");
        assert_eq!(options["B"], "Vitamin C");
        assert_eq!(options["C"], "Vitamin D");
        assert_eq!(options["D"], "Vitamin K");
        assert_eq!(json["id"], 7);
    }
}
