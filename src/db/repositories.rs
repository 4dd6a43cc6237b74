//! Repositories: users (auth) and threads (reporting, read-only).

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

// ---- Users ----

/// A link to a profile on an external platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub platform: String,
    pub profile_url: String,
}

/// Postal address attached to a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub social_profiles: Option<Json<Vec<SocialProfile>>>,
    pub address: Option<Json<Address>>,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub profile_picture: Option<&'a str>,
    pub social_profiles: Option<&'a [SocialProfile]>,
    pub address: Option<&'a Address>,
}

/// Inserts a new user with the default `user` role. The unique indexes on
/// username and email are authoritative: a duplicate-key fault (two
/// registrations racing past the advisory pre-checks) comes back as
/// `Conflict`, not as an internal error.
pub async fn user_create(pool: &DbPool, new: &NewUser<'_>) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, email, password_hash, full_name, bio, profile_picture,
                           social_profiles, address, roles)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, username, email, password_hash, full_name, bio, profile_picture,
                  social_profiles, address, roles, is_active, created_at, updated_at
        "#,
    )
    .bind(new.username)
    .bind(new.email)
    .bind(new.password_hash)
    .bind(new.full_name)
    .bind(new.bio)
    .bind(new.profile_picture)
    .bind(new.social_profiles.map(Json))
    .bind(new.address.map(Json))
    .bind(vec!["user".to_string()])
    .fetch_one(pool)
    .await
    .map_err(translate_unique_violation)?;
    Ok(row)
}

pub async fn user_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, password_hash, full_name, bio, profile_picture,
               social_profiles, address, roles, is_active, created_at, updated_at
        FROM users WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn user_find_by_username(pool: &DbPool, username: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, password_hash, full_name, bio, profile_picture,
               social_profiles, address, roles, is_active, created_at, updated_at
        FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

fn translate_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23505") {
            return match db.constraint() {
                Some(c) if c.contains("email") => {
                    AppError::Conflict("Email already in use".to_string())
                }
                Some(c) if c.contains("username") => {
                    AppError::Conflict("Username already in use".to_string())
                }
                _ => AppError::Conflict("Username or email already in use".to_string()),
            };
        }
    }
    AppError::Db(e)
}

// ---- Threads (read-only; only ever counted) ----

pub async fn thread_count(pool: &DbPool) -> AppResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*)::bigint FROM threads")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn thread_count_between(
    pool: &DbPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<i64> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*)::bigint FROM threads WHERE created_at >= $1 AND created_at <= $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}
