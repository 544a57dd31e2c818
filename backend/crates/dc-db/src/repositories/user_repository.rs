use crate::{DbError, Result as DbErrorResult};

use dc_core::{User, normalize_email};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::QueryBuilder;
use uuid::Uuid;

type UserRow = (String, String, String, String, String, i64);

pub struct UserRepository;

impl UserRepository {
    /// Insert a new identity. A taken email yields `DbError::DuplicateEmail`.
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash, avatar, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.created_at.timestamp())
        .execute(executor)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, avatar, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(user_from_row).transpose()
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, avatar, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(normalize_email(email))
        .fetch_optional(executor)
        .await?;

        row.map(user_from_row).transpose()
    }

    /// Batch lookup used to attach owner summaries to profile listings
    pub async fn find_by_ids<'e, E>(executor: E, ids: &[Uuid]) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<sqlx::Sqlite>::new(
            "SELECT id, name, email, password_hash, avatar, created_at FROM users WHERE id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.to_string());
        }
        separated.push_unseparated(")");

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(user_from_row).collect()
    }

    /// Returns whether a row was removed
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn user_from_row(row: UserRow) -> DbErrorResult<User> {
    let (id, name, email, password_hash, avatar, created_at) = row;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name,
        email,
        password_hash,
        avatar,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
