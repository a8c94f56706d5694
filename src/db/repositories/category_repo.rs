//! Category repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::error::DbResult;
use crate::db::models::Category;

/// Category repository for read-only category access
pub struct CategoryRepository;

impl CategoryRepository {
    /// Get all categories ordered by id ascending
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    ///
    /// # Returns
    /// Vector of all categories or database error
    pub async fn list_all(pool: &DatabasePool) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(pool)
            .await?;

        Ok(categories)
    }

    /// Get a category by id
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `id` - Category identifier
    ///
    /// # Returns
    /// Category if found, None if not found, or database error
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// Count total categories
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    ///
    /// # Returns
    /// Total category count or database error
    pub async fn count(pool: &DatabasePool) -> DbResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}
