//! Question repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::Question;

/// Question repository for managing question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Create a new question in the database
    ///
    /// Fields are passed through as-is; absent fields become NULL and are
    /// rejected by the schema's NOT NULL constraints.
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `question` - Question text
    /// * `answer` - Answer text
    /// * `difficulty` - Difficulty rating
    /// * `category` - Owning category id
    ///
    /// # Returns
    /// Created question with its store-assigned id, or database error
    pub async fn create(
        pool: &DatabasePool,
        question: Option<String>,
        answer: Option<String>,
        difficulty: Option<i64>,
        category: Option<i64>,
    ) -> DbResult<Question> {
        let created = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(question)
        .bind(answer)
        .bind(difficulty)
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// Get a question by id
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `id` - Question identifier
    ///
    /// # Returns
    /// Question if found, None if not found, or database error
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(question)
    }

    /// Get all questions ordered by id ascending
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    ///
    /// # Returns
    /// Vector of all questions or database error
    pub async fn list_all(pool: &DatabasePool) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>("SELECT * FROM questions ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(questions)
    }

    /// Get all questions belonging to a category, ordered by id
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `category` - Category id to filter by
    ///
    /// # Returns
    /// Vector of matching questions or database error
    pub async fn list_by_category(pool: &DatabasePool, category: i64) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Search questions by case-insensitive substring of the question text
    ///
    /// The answer text is not searched. An empty term matches every question.
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `term` - Substring to match
    ///
    /// # Returns
    /// Vector of matching questions ordered by id, or database error
    pub async fn search(pool: &DatabasePool, term: &str) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT * FROM questions WHERE question LIKE '%' || ? || '%' ORDER BY id",
        )
        .bind(term)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Delete a question
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `id` - Question identifier
    ///
    /// # Returns
    /// Success or database error
    pub async fn delete(pool: &DatabasePool, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count total questions
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    ///
    /// # Returns
    /// Total question count or database error
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}
