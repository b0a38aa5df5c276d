//! Typed access to the professions and questions tables.
//!
//! Both tables are read-only after seeding, so a shared pool with no
//! locking is safe.

use rand::seq::SliceRandom;
use sqlx::SqlitePool;

use crate::models::{Profession, Question};

/// Returns the full profession catalog. The catalog is a small fixed
/// set, so no pagination.
pub async fn list_professions(pool: &SqlitePool) -> Result<Vec<Profession>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, description FROM professions ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_profession(
    pool: &SqlitePool,
    profession_id: i64,
) -> Result<Option<Profession>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, description FROM professions WHERE id = ?1")
        .bind(profession_id)
        .fetch_optional(pool)
        .await
}

/// Returns every question in a profession's pool.
pub async fn questions_for_profession(
    pool: &SqlitePool,
    profession_id: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as(
        r"
        SELECT id, profession_id, question, option_a, option_b, option_c, option_d,
               correct_answer, explanation
        FROM questions
        WHERE profession_id = ?1
        ",
    )
    .bind(profession_id)
    .fetch_all(pool)
    .await
}

pub async fn find_question(
    pool: &SqlitePool,
    question_id: i64,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as(
        r"
        SELECT id, profession_id, question, option_a, option_b, option_c, option_d,
               correct_answer, explanation
        FROM questions
        WHERE id = ?1
        ",
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

/// Picks one question uniformly at random. `None` on an empty pool.
pub fn pick_random(questions: &[Question]) -> Option<&Question> {
    questions.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    async fn insert_profession(pool: &SqlitePool, name: &str) -> i64 {
        sqlx::query("INSERT INTO professions (name, description) VALUES (?1, ?2)")
            .bind(name)
            .bind("test profession")
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn insert_question(pool: &SqlitePool, profession_id: i64, text: &str, correct: &str) {
        sqlx::query(
            r"
            INSERT INTO questions
                (profession_id, question, option_a, option_b, option_c, option_d,
                 correct_answer, explanation)
            VALUES (?1, ?2, 'one', 'two', 'three', 'four', ?3, 'because')
            ",
        )
        .bind(profession_id)
        .bind(text)
        .bind(correct)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_random_question_belongs_to_profession() {
        let pool = test_pool().await;
        let nursing = insert_profession(&pool, "Nursing").await;
        let pharmacy = insert_profession(&pool, "Pharmacy").await;
        for i in 0..5 {
            insert_question(&pool, nursing, &format!("nursing q{i}"), "A").await;
        }
        insert_question(&pool, pharmacy, "pharmacy q", "B").await;

        for _ in 0..20 {
            let pool_questions = questions_for_profession(&pool, nursing).await.unwrap();
            let picked = pick_random(&pool_questions).unwrap();
            assert_eq!(picked.profession_id, nursing);
        }
    }

    #[tokio::test]
    async fn test_empty_pool_yields_no_question() {
        let pool = test_pool().await;
        let dentistry = insert_profession(&pool, "Dentistry").await;

        let questions = questions_for_profession(&pool, dentistry).await.unwrap();
        assert!(questions.is_empty());
        assert!(pick_random(&questions).is_none());
    }

    #[tokio::test]
    async fn test_find_question_unknown_id_is_none() {
        let pool = test_pool().await;
        assert!(find_question(&pool, 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_professions_returns_all() {
        let pool = test_pool().await;
        insert_profession(&pool, "Nursing").await;
        insert_profession(&pool, "Medicine").await;

        let professions = list_professions(&pool).await.unwrap();
        let names: Vec<&str> = professions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Nursing", "Medicine"]);
    }
}
