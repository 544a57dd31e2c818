//! Profile aggregates persisted as one JSON document per owner.
//!
//! The `created_at` / `updated_at` columns mirror the document for ordering;
//! the document is the source of truth.

use crate::Result as DbErrorResult;

use dc_core::Profile;

use uuid::Uuid;

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let document = sqlx::query_scalar::<_, String>(
            "SELECT document FROM profiles WHERE owner_id = ?",
        )
        .bind(owner_id.to_string())
        .fetch_optional(executor)
        .await?;

        document
            .map(|d| serde_json::from_str::<Profile>(&d).map_err(Into::into))
            .transpose()
    }

    /// All profiles, oldest first
    pub async fn list_all<'e, E>(executor: E) -> DbErrorResult<Vec<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let documents = sqlx::query_scalar::<_, String>(
            "SELECT document FROM profiles ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(executor)
        .await?;

        documents
            .iter()
            .map(|d| serde_json::from_str::<Profile>(d).map_err(Into::into))
            .collect()
    }

    /// Insert or replace the owner's document
    pub async fn save<'e, E>(executor: E, profile: &Profile) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let document = serde_json::to_string(profile)?;

        sqlx::query(
            r#"
                INSERT INTO profiles (id, owner_id, document, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(owner_id) DO UPDATE SET
                    document = excluded.document,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.owner_id.to_string())
        .bind(document)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete_by_owner<'e, E>(executor: E, owner_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM profiles WHERE owner_id = ?")
            .bind(owner_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
