// SPDX-License-Identifier: MIT

//! SQLite store with typed per-record operations.
//!
//! Every query filters by the owning user id; cross-user access is
//! rejected by construction. Each mutation is a single statement.

use crate::error::AppError;
use crate::models::activity::{ActivityEntry, NewActivityEntry};
use crate::models::favorite::{Favorite, NewFavorite};
use crate::models::food::{FoodEntry, NewFoodEntry};
use crate::models::goal::{Goal, NewGoal};
use crate::models::water::WaterIntakeEntry;
use crate::time_utils::DayBounds;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use uuid::Uuid;

/// Database handle. Cheap to clone; all operations are user-scoped.
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Connect to the database, creating the file if missing.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Database(format!("Invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect: {}", e)))?;

        tracing::info!(url = database_url, "Connected to SQLite");

        Ok(Self { pool })
    }

    /// In-memory database for tests. A single pooled connection keeps the
    /// database alive for the pool's lifetime.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory db: {}", e)))?;
        Ok(Self { pool })
    }

    /// Run embedded migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
        Ok(())
    }

    // ─── Food Entries ────────────────────────────────────────────

    /// Insert one food entry, generating id and timestamps. A caller-
    /// supplied `logged_at` overrides the event time.
    pub async fn insert_food_entry(
        &self,
        user_id: &str,
        new: NewFoodEntry,
    ) -> Result<FoodEntry, AppError> {
        let entry = FoodEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            barcode: new.barcode,
            product_name: new.product_name,
            brand: new.brand,
            serving_size: new.serving_size,
            serving_size_grams: new.serving_size_grams,
            calories: new.calories,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            saturated_fat: new.saturated_fat,
            fiber: new.fiber,
            sugar: new.sugar,
            sodium: new.sodium,
            salt: new.salt,
            meal_type: new.meal_type,
            logged_at: new.logged_at.unwrap_or_else(Utc::now),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO food_entries
                (id, user_id, barcode, product_name, brand, serving_size,
                 serving_size_grams, calories, protein, carbs, fat,
                 saturated_fat, fiber, sugar, sodium, salt, meal_type,
                 logged_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                    ?14, ?15, ?16, ?17, ?18, ?19)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(&entry.barcode)
        .bind(&entry.product_name)
        .bind(&entry.brand)
        .bind(&entry.serving_size)
        .bind(entry.serving_size_grams)
        .bind(entry.calories)
        .bind(entry.protein)
        .bind(entry.carbs)
        .bind(entry.fat)
        .bind(entry.saturated_fat)
        .bind(entry.fiber)
        .bind(entry.sugar)
        .bind(entry.sodium)
        .bind(entry.salt)
        .bind(entry.meal_type)
        .bind(entry.logged_at)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// List a user's food entries, newest logged first, optionally limited
    /// to one calendar day and capped. `limit: None` means unbounded.
    pub async fn food_entries_for_user(
        &self,
        user_id: &str,
        day: Option<DayBounds>,
        limit: Option<i64>,
    ) -> Result<Vec<FoodEntry>, AppError> {
        let limit = limit.unwrap_or(-1); // SQLite: negative LIMIT = no limit
        let rows = match day {
            Some(d) => {
                sqlx::query_as::<_, FoodEntry>(
                    r#"
                    SELECT * FROM food_entries
                    WHERE user_id = ?1 AND logged_at >= ?2 AND logged_at <= ?3
                    ORDER BY logged_at DESC
                    LIMIT ?4
                    "#,
                )
                .bind(user_id)
                .bind(d.start)
                .bind(d.end)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, FoodEntry>(
                    r#"
                    SELECT * FROM food_entries
                    WHERE user_id = ?1
                    ORDER BY logged_at DESC
                    LIMIT ?2
                    "#,
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    // ─── Water Intake ────────────────────────────────────────────

    pub async fn insert_water_intake(
        &self,
        user_id: &str,
        amount_ml: i64,
        logged_at: Option<DateTime<Utc>>,
    ) -> Result<WaterIntakeEntry, AppError> {
        let entry = WaterIntakeEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount_ml,
            logged_at: logged_at.unwrap_or_else(Utc::now),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO water_intake (id, user_id, amount_ml, logged_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(entry.amount_ml)
        .bind(entry.logged_at)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Total milliliters logged inside one calendar day.
    pub async fn water_total_for_day(
        &self,
        user_id: &str,
        day: DayBounds,
    ) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount_ml), 0) FROM water_intake
            WHERE user_id = ?1 AND logged_at >= ?2 AND logged_at <= ?3
            "#,
        )
        .bind(user_id)
        .bind(day.start)
        .bind(day.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    // ─── Activities ──────────────────────────────────────────────

    pub async fn insert_activity(
        &self,
        user_id: &str,
        new: NewActivityEntry,
    ) -> Result<ActivityEntry, AppError> {
        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            activity_type: new.activity_type,
            duration_minutes: new.duration_minutes,
            calories_burned: Some(new.calories_burned),
            notes: new.notes,
            logged_at: new.logged_at.unwrap_or_else(Utc::now),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO activities
                (id, user_id, activity_type, duration_minutes,
                 calories_burned, notes, logged_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.user_id)
        .bind(&entry.activity_type)
        .bind(entry.duration_minutes)
        .bind(entry.calories_burned)
        .bind(&entry.notes)
        .bind(entry.logged_at)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// List a user's activities, newest logged first.
    pub async fn activities_for_user(
        &self,
        user_id: &str,
        day: Option<DayBounds>,
        limit: Option<i64>,
    ) -> Result<Vec<ActivityEntry>, AppError> {
        let limit = limit.unwrap_or(-1);
        let rows = match day {
            Some(d) => {
                sqlx::query_as::<_, ActivityEntry>(
                    r#"
                    SELECT * FROM activities
                    WHERE user_id = ?1 AND logged_at >= ?2 AND logged_at <= ?3
                    ORDER BY logged_at DESC
                    LIMIT ?4
                    "#,
                )
                .bind(user_id)
                .bind(d.start)
                .bind(d.end)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ActivityEntry>(
                    r#"
                    SELECT * FROM activities
                    WHERE user_id = ?1
                    ORDER BY logged_at DESC
                    LIMIT ?2
                    "#,
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    // ─── Goals ───────────────────────────────────────────────────

    pub async fn get_goal(&self, user_id: &str) -> Result<Option<Goal>, AppError> {
        let goal = sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE user_id = ?1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(goal)
    }

    /// Create or update the user's goal in one atomic statement and return
    /// the goal id. Concurrent upserts are last-write-wins.
    pub async fn upsert_goal(&self, user_id: &str, new: NewGoal) -> Result<String, AppError> {
        let now = Utc::now();
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO goals
                (id, user_id, daily_calories, protein_grams, carbs_grams,
                 fat_grams, weight_goal_kg, current_weight_kg,
                 activity_level, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
            ON CONFLICT(user_id) DO UPDATE SET
                daily_calories = excluded.daily_calories,
                protein_grams = excluded.protein_grams,
                carbs_grams = excluded.carbs_grams,
                fat_grams = excluded.fat_grams,
                weight_goal_kg = excluded.weight_goal_kg,
                current_weight_kg = excluded.current_weight_kg,
                activity_level = excluded.activity_level,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id)
        .bind(new.daily_calories)
        .bind(new.protein_grams)
        .bind(new.carbs_grams)
        .bind(new.fat_grams)
        .bind(new.weight_goal_kg)
        .bind(new.current_weight_kg)
        .bind(new.activity_level)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    // ─── Favorites ───────────────────────────────────────────────

    pub async fn insert_favorite(
        &self,
        user_id: &str,
        new: NewFavorite,
    ) -> Result<Favorite, AppError> {
        let favorite = Favorite {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            barcode: new.barcode,
            product_name: new.product_name,
            brand: new.brand,
            serving_size: new.serving_size,
            serving_size_grams: new.serving_size_grams,
            calories: new.calories,
            protein: new.protein,
            carbs: new.carbs,
            fat: new.fat,
            fiber: new.fiber,
            sugar: new.sugar,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO favorites
                (id, user_id, barcode, product_name, brand, serving_size,
                 serving_size_grams, calories, protein, carbs, fat, fiber,
                 sugar, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
        )
        .bind(&favorite.id)
        .bind(&favorite.user_id)
        .bind(&favorite.barcode)
        .bind(&favorite.product_name)
        .bind(&favorite.brand)
        .bind(&favorite.serving_size)
        .bind(favorite.serving_size_grams)
        .bind(favorite.calories)
        .bind(favorite.protein)
        .bind(favorite.carbs)
        .bind(favorite.fat)
        .bind(favorite.fiber)
        .bind(favorite.sugar)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await?;

        Ok(favorite)
    }

    pub async fn favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, AppError> {
        let rows = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT * FROM favorites
            WHERE user_id = ?1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete a favorite by id and owner. Idempotent: deleting a missing
    /// row, or one owned by someone else, is a no-op.
    pub async fn delete_favorite(&self, user_id: &str, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM favorites WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
