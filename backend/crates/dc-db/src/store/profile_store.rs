//! Aggregate store for profiles.
//!
//! Every read-modify-write runs under the owner's lock and inside a single
//! transaction, so concurrent edits by the same owner serialize and a failed
//! write leaves the stored aggregate untouched.

use crate::{DbError, OwnerLocks, ProfileRepository, Result as DbErrorResult, UserRepository};

use dc_core::{NewEducation, NewExperience, Profile, ProfileFields};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Take the write lock up front so two writers never deadlock on upgrade
const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

#[derive(Clone)]
pub struct ProfileStore {
    pool: SqlitePool,
    locks: Arc<OwnerLocks>,
}

impl ProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            locks: Arc::new(OwnerLocks::new()),
        }
    }

    pub async fn get_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Profile> {
        ProfileRepository::find_by_owner(&self.pool, owner_id)
            .await?
            .ok_or_else(|| not_found(owner_id))
    }

    /// Public lookup of another user's profile
    pub async fn get_by_identifier(&self, owner_id: Uuid) -> DbErrorResult<Profile> {
        self.get_by_owner(owner_id).await
    }

    pub async fn list_all(&self) -> DbErrorResult<Vec<Profile>> {
        ProfileRepository::list_all(&self.pool).await
    }

    /// Create the owner's profile or sparsely update the existing one. A
    /// create needs status and skills and an owner that still exists; both are
    /// checked under the owner's lock.
    pub async fn upsert(&self, owner_id: Uuid, fields: ProfileFields) -> DbErrorResult<Profile> {
        let _guard = self.locks.acquire(owner_id).await;
        let mut tx = self.pool.begin_with(BEGIN_IMMEDIATE).await?;

        let profile = match ProfileRepository::find_by_owner(&mut *tx, owner_id).await? {
            Some(mut existing) => {
                existing.apply(fields);
                existing
            }
            None => {
                fields.check_creatable()?;
                if UserRepository::find_by_id(&mut *tx, owner_id).await?.is_none() {
                    return Err(DbError::OwnerNotFound {
                        owner_id,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Profile::create(owner_id, fields)
            }
        };

        ProfileRepository::save(&mut *tx, &profile).await?;
        tx.commit().await?;

        Ok(profile)
    }

    pub async fn add_experience(
        &self,
        owner_id: Uuid,
        entry: NewExperience,
    ) -> DbErrorResult<Profile> {
        self.modify(owner_id, |profile| {
            profile.add_experience(entry);
            true
        })
        .await
    }

    /// Unknown `entry_id` returns the aggregate unchanged without writing
    pub async fn remove_experience(&self, owner_id: Uuid, entry_id: Uuid) -> DbErrorResult<Profile> {
        self.modify(owner_id, |profile| profile.remove_experience(entry_id))
            .await
    }

    pub async fn add_education(&self, owner_id: Uuid, entry: NewEducation) -> DbErrorResult<Profile> {
        self.modify(owner_id, |profile| {
            profile.add_education(entry);
            true
        })
        .await
    }

    pub async fn remove_education(&self, owner_id: Uuid, entry_id: Uuid) -> DbErrorResult<Profile> {
        self.modify(owner_id, |profile| profile.remove_education(entry_id))
            .await
    }

    /// Remove the owner's profile and identity together. Deleting an owner
    /// that no longer exists succeeds.
    pub async fn delete_owner(&self, owner_id: Uuid) -> DbErrorResult<()> {
        let _guard = self.locks.acquire(owner_id).await;
        let mut tx = self.pool.begin_with(BEGIN_IMMEDIATE).await?;

        let profile_removed = ProfileRepository::delete_by_owner(&mut *tx, owner_id).await?;
        let user_removed = UserRepository::delete(&mut *tx, owner_id).await?;

        tx.commit().await?;

        log::debug!(
            "Deleted owner {} (profile: {}, user: {})",
            owner_id,
            profile_removed,
            user_removed
        );

        Ok(())
    }

    /// Load, mutate and persist the owner's aggregate. The write is skipped
    /// when `mutate` reports no change.
    async fn modify<F>(&self, owner_id: Uuid, mutate: F) -> DbErrorResult<Profile>
    where
        F: FnOnce(&mut Profile) -> bool,
    {
        let _guard = self.locks.acquire(owner_id).await;
        let mut tx = self.pool.begin_with(BEGIN_IMMEDIATE).await?;

        let mut profile = ProfileRepository::find_by_owner(&mut *tx, owner_id)
            .await?
            .ok_or_else(|| not_found(owner_id))?;

        if mutate(&mut profile) {
            ProfileRepository::save(&mut *tx, &profile).await?;
            tx.commit().await?;
        }

        Ok(profile)
    }
}

#[track_caller]
fn not_found(owner_id: Uuid) -> DbError {
    DbError::ProfileNotFound {
        owner_id,
        location: ErrorLocation::from(Location::caller()),
    }
}
