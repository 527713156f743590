//! Inactivity repository for database operations.
//!
//! Each member has at most one row in the `inactivity` table. Rows are created on the
//! first offline sighting and are never deleted.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::inactivity::InactivityRecord;

/// Repository for inactivity record database operations.
pub struct InactivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InactivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the record of a member.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Some(InactivityRecord))` - Member is tracked
    /// - `Ok(None)` - Member has never been sighted offline
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_member_id(
        &self,
        member_id: u64,
    ) -> Result<Option<InactivityRecord>, DbErr> {
        entity::prelude::Inactivity::find_by_id(member_id.to_string())
            .one(self.db)
            .await?
            .map(InactivityRecord::from_entity)
            .transpose()
    }

    /// Records an offline sighting of a member.
    ///
    /// Inserts a new record with `role_added = false` or, if the member is already
    /// tracked, updates `last_seen` only. The `role_added` flag and the original
    /// `guild_id` of an existing record are left untouched.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID
    /// - `guild_id` - Discord guild ID the member was sighted in
    /// - `seen_at` - Time of the sighting
    ///
    /// # Returns
    /// - `Ok(InactivityRecord)` - The created or updated record
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_last_seen(
        &self,
        member_id: u64,
        guild_id: u64,
        seen_at: DateTime<Utc>,
    ) -> Result<InactivityRecord, DbErr> {
        let model = entity::prelude::Inactivity::insert(entity::inactivity::ActiveModel {
            member_id: ActiveValue::Set(member_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            last_seen: ActiveValue::Set(Some(seen_at)),
            role_added: ActiveValue::Set(false),
        })
        .on_conflict(
            OnConflict::column(entity::inactivity::Column::MemberId)
                .update_column(entity::inactivity::Column::LastSeen)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        InactivityRecord::from_entity(model)
    }

    /// Marks that the marker role has been granted to a member.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the member is not tracked)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_role_added(&self, member_id: u64) -> Result<u64, DbErr> {
        self.set_role_added(member_id, true).await
    }

    /// Clears the role flag of a member after a manual role removal.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the member is not tracked)
    /// - `Err(DbErr)` - Database error during update
    pub async fn clear_role_added(&self, member_id: u64) -> Result<u64, DbErr> {
        self.set_role_added(member_id, false).await
    }

    /// Gets all records of a guild that currently have the role flag set.
    pub async fn get_flagged_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<Vec<InactivityRecord>, DbErr> {
        entity::prelude::Inactivity::find()
            .filter(entity::inactivity::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::inactivity::Column::RoleAdded.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(InactivityRecord::from_entity)
            .collect()
    }

    async fn set_role_added(&self, member_id: u64, role_added: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Inactivity::update_many()
            .col_expr(entity::inactivity::Column::RoleAdded, Expr::value(role_added))
            .filter(entity::inactivity::Column::MemberId.eq(member_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
