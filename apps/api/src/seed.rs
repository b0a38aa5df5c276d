//! Idempotent sample-data seeding.
//!
//! Professions are upserted by name; questions are inserted only when the
//! profession does not already hold a question with the same text, so the
//! seeder can run any number of times against the same database.

use anyhow::{bail, Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::quiz::answer::AnswerLetter;

struct SeedProfession {
    name: &'static str,
    description: &'static str,
}

struct SeedQuestion {
    profession: &'static str,
    question: &'static str,
    option_a: &'static str,
    option_b: &'static str,
    option_c: &'static str,
    option_d: &'static str,
    correct_answer: &'static str,
    explanation: &'static str,
}

const SAMPLE_PROFESSIONS: &[SeedProfession] = &[
    SeedProfession {
        name: "Nursing",
        description: "Practice questions for the Nursing licensure examination covering fundamentals, medical-surgical, pediatrics, and more.",
    },
    SeedProfession {
        name: "Pharmacy",
        description: "Test your knowledge in pharmaceutical sciences, pharmacology, clinical pharmacy, and drug dispensing.",
    },
    SeedProfession {
        name: "Medicine",
        description: "Comprehensive review for medical licensure covering internal medicine, surgery, pediatrics, and clinical practice.",
    },
    SeedProfession {
        name: "Dentistry",
        description: "Dental licensure exam preparation including oral anatomy, periodontics, endodontics, and oral surgery.",
    },
    SeedProfession {
        name: "Physical Therapy",
        description: "Physical therapy practice questions covering anatomy, exercise physiology, rehabilitation, and treatment techniques.",
    },
];

const SAMPLE_QUESTIONS: &[SeedQuestion] = &[
    // Nursing
    SeedQuestion {
        profession: "Nursing",
        question: "A 65-year-old patient with diabetes mellitus is admitted with diabetic ketoacidosis (DKA). Which of the following is the priority nursing intervention?",
        option_a: "Administer insulin subcutaneously",
        option_b: "Establish IV access and begin fluid resuscitation",
        option_c: "Check blood glucose level",
        option_d: "Obtain arterial blood gas",
        correct_answer: "B",
        explanation: "In DKA, the priority is fluid resuscitation to correct dehydration and shock. IV access must be established first to administer fluids and medications effectively.",
    },
    SeedQuestion {
        profession: "Nursing",
        question: "A nurse is caring for a postoperative patient who received general anesthesia. Which assessment finding requires immediate intervention?",
        option_a: "Temperature of 97.8°F (36.6°C)",
        option_b: "Blood pressure of 110/70 mmHg",
        option_c: "Respiratory rate of 8 breaths per minute",
        option_d: "Pulse rate of 88 beats per minute",
        correct_answer: "C",
        explanation: "A respiratory rate of 8 breaths per minute indicates respiratory depression, which is a serious complication of general anesthesia that requires immediate intervention.",
    },
    SeedQuestion {
        profession: "Nursing",
        question: "When administering medications to a pediatric patient, the nurse should primarily base the dosage on the child's:",
        option_a: "Age",
        option_b: "Height",
        option_c: "Weight",
        option_d: "Body surface area",
        correct_answer: "C",
        explanation: "Pediatric medication dosages are primarily calculated based on the child's weight (mg/kg) to ensure safe and effective dosing.",
    },
    SeedQuestion {
        profession: "Nursing",
        question: "A patient with heart failure is prescribed furosemide (Lasix). Which electrolyte should the nurse monitor most closely?",
        option_a: "Sodium",
        option_b: "Potassium",
        option_c: "Calcium",
        option_d: "Magnesium",
        correct_answer: "B",
        explanation: "Furosemide is a loop diuretic that can cause significant potassium loss. Hypokalemia can lead to dangerous cardiac arrhythmias.",
    },
    SeedQuestion {
        profession: "Nursing",
        question: "According to Maslow's hierarchy of needs, which patient need should the nurse address first?",
        option_a: "A patient requesting pain medication",
        option_b: "A patient with difficulty breathing",
        option_c: "A patient feeling anxious about surgery",
        option_d: "A patient asking about discharge planning",
        correct_answer: "B",
        explanation: "Breathing (oxygenation) is a basic physiological need and takes priority over all other needs according to Maslow's hierarchy.",
    },
    // Pharmacy
    SeedQuestion {
        profession: "Pharmacy",
        question: "Which of the following is the generic name for Lipitor?",
        option_a: "Simvastatin",
        option_b: "Atorvastatin",
        option_c: "Lovastatin",
        option_d: "Pravastatin",
        correct_answer: "B",
        explanation: "Atorvastatin is the generic name for Lipitor, a commonly prescribed HMG-CoA reductase inhibitor used to lower cholesterol.",
    },
    SeedQuestion {
        profession: "Pharmacy",
        question: "A prescription reads \"Take 1 tablet BID for 7 days.\" How many tablets should be dispensed?",
        option_a: "7 tablets",
        option_b: "14 tablets",
        option_c: "21 tablets",
        option_d: "28 tablets",
        correct_answer: "B",
        explanation: "BID means twice daily. For 7 days: 1 tablet × 2 times per day × 7 days = 14 tablets.",
    },
    SeedQuestion {
        profession: "Pharmacy",
        question: "Which class of drugs requires a black box warning for increased risk of suicidal thoughts in young adults?",
        option_a: "Antihypertensives",
        option_b: "Antibiotics",
        option_c: "Antidepressants",
        option_d: "Antihistamines",
        correct_answer: "C",
        explanation: "Antidepressants carry a black box warning for increased risk of suicidal thinking and behavior in children, adolescents, and young adults.",
    },
    SeedQuestion {
        profession: "Pharmacy",
        question: "What is the maximum daily dose of acetaminophen for adults?",
        option_a: "2000 mg",
        option_b: "3000 mg",
        option_c: "4000 mg",
        option_d: "5000 mg",
        correct_answer: "C",
        explanation: "The maximum recommended daily dose of acetaminophen for adults is 4000 mg (4 grams) to prevent hepatotoxicity.",
    },
    SeedQuestion {
        profession: "Pharmacy",
        question: "Which medication requires therapeutic drug monitoring due to its narrow therapeutic index?",
        option_a: "Amoxicillin",
        option_b: "Digoxin",
        option_c: "Ibuprofen",
        option_d: "Omeprazole",
        correct_answer: "B",
        explanation: "Digoxin has a narrow therapeutic index, meaning the difference between therapeutic and toxic levels is small, requiring regular monitoring.",
    },
    // Medicine
    SeedQuestion {
        profession: "Medicine",
        question: "A 45-year-old male presents with chest pain that worsens with inspiration and improves when leaning forward. The most likely diagnosis is:",
        option_a: "Myocardial infarction",
        option_b: "Pericarditis",
        option_c: "Pneumonia",
        option_d: "Pulmonary embolism",
        correct_answer: "B",
        explanation: "Pericarditis characteristically presents with chest pain that worsens with inspiration and improves when the patient leans forward (relief position).",
    },
    SeedQuestion {
        profession: "Medicine",
        question: "The first-line treatment for hypertension in a diabetic patient is:",
        option_a: "Beta-blockers",
        option_b: "Calcium channel blockers",
        option_c: "ACE inhibitors",
        option_d: "Diuretics",
        correct_answer: "C",
        explanation: "ACE inhibitors are first-line for diabetic patients with hypertension as they provide cardiovascular and renal protection.",
    },
    SeedQuestion {
        profession: "Medicine",
        question: "Which laboratory finding is most characteristic of iron deficiency anemia?",
        option_a: "Elevated MCV",
        option_b: "Decreased TIBC",
        option_c: "Elevated ferritin",
        option_d: "Decreased serum iron",
        correct_answer: "D",
        explanation: "Iron deficiency anemia is characterized by decreased serum iron, increased TIBC, and decreased ferritin levels.",
    },
];

#[derive(Debug)]
pub struct SeedSummary {
    pub professions: usize,
    pub questions_inserted: usize,
}

pub async fn run(pool: &SqlitePool) -> Result<SeedSummary> {
    for p in SAMPLE_PROFESSIONS {
        sqlx::query(
            r"
            INSERT INTO professions (name, description) VALUES (?1, ?2)
            ON CONFLICT(name) DO UPDATE SET description = excluded.description
            ",
        )
        .bind(p.name)
        .bind(p.description)
        .execute(pool)
        .await?;
    }
    info!("Upserted {} professions", SAMPLE_PROFESSIONS.len());

    let mut inserted = 0usize;
    for q in SAMPLE_QUESTIONS {
        if q.correct_answer.parse::<AnswerLetter>().is_err() {
            bail!(
                "seed question '{}' has invalid correct answer '{}'",
                q.question,
                q.correct_answer
            );
        }

        let profession_id: i64 = sqlx::query_scalar("SELECT id FROM professions WHERE name = ?1")
            .bind(q.profession)
            .fetch_optional(pool)
            .await?
            .with_context(|| format!("profession '{}' is not seeded", q.profession))?;

        let already_present: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM questions WHERE profession_id = ?1 AND question = ?2",
        )
        .bind(profession_id)
        .bind(q.question)
        .fetch_one(pool)
        .await?;
        if already_present > 0 {
            continue;
        }

        sqlx::query(
            r"
            INSERT INTO questions
                (profession_id, question, option_a, option_b, option_c, option_d,
                 correct_answer, explanation)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(profession_id)
        .bind(q.question)
        .bind(q.option_a)
        .bind(q.option_b)
        .bind(q.option_c)
        .bind(q.option_d)
        .bind(q.correct_answer)
        .bind(q.explanation)
        .execute(pool)
        .await?;
        inserted += 1;
    }
    info!("Inserted {inserted} questions");

    Ok(SeedSummary {
        professions: SAMPLE_PROFESSIONS.len(),
        questions_inserted: inserted,
    })
}

/// Per-profession question counts, for the post-seed summary.
pub async fn questions_per_profession(pool: &SqlitePool) -> Result<Vec<(String, i64)>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r"
        SELECT p.name, COUNT(q.id)
        FROM professions p
        LEFT JOIN questions q ON p.id = q.profession_id
        GROUP BY p.id, p.name
        ORDER BY p.name
        ",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    #[test]
    fn test_sample_data_is_internally_consistent() {
        let names: Vec<&str> = SAMPLE_PROFESSIONS.iter().map(|p| p.name).collect();
        for q in SAMPLE_QUESTIONS {
            assert!(
                names.contains(&q.profession),
                "question references unknown profession '{}'",
                q.profession
            );
            assert!(
                q.correct_answer.parse::<AnswerLetter>().is_ok(),
                "invalid correct answer '{}'",
                q.correct_answer
            );
        }
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();

        let first = run(&pool).await.unwrap();
        assert_eq!(first.professions, SAMPLE_PROFESSIONS.len());
        assert_eq!(first.questions_inserted, SAMPLE_QUESTIONS.len());

        let second = run(&pool).await.unwrap();
        assert_eq!(second.questions_inserted, 0);

        let profession_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM professions")
            .fetch_one(&pool)
            .await
            .unwrap();
        let question_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(profession_count as usize, SAMPLE_PROFESSIONS.len());
        assert_eq!(question_count as usize, SAMPLE_QUESTIONS.len());
    }

    #[tokio::test]
    async fn test_summary_counts_by_profession() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let counts = questions_per_profession(&pool).await.unwrap();
        let nursing = counts.iter().find(|(name, _)| name == "Nursing").unwrap();
        assert_eq!(nursing.1, 5);
        let dentistry = counts.iter().find(|(name, _)| name == "Dentistry").unwrap();
        assert_eq!(dentistry.1, 0);
    }
}
