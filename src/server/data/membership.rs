//! Channel membership repository.
//!
//! Wraps the `channel_user` table, which holds one row per member of a channel with
//! their role.

use chrono::Utc;
use entity::channel_user::ChannelRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::membership::{Member, Membership};

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the membership of a user in a channel.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - The user is a member
    /// - `Ok(None)` - The user is not a member (or the channel doesn't exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, channel_id: i32, user_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ChannelUser::find_by_id((channel_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Adds a user to a channel with the given role.
    pub async fn add(
        &self,
        channel_id: i32,
        user_id: i32,
        role: ChannelRole,
    ) -> Result<Membership, DbErr> {
        let entity = entity::channel_user::ActiveModel {
            channel_id: ActiveValue::Set(channel_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Changes a member's role.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - Updated membership
    /// - `Ok(None)` - The user is not a member of the channel
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(
        &self,
        channel_id: i32,
        user_id: i32,
        role: ChannelRole,
    ) -> Result<Option<Membership>, DbErr> {
        let Some(existing) = entity::prelude::ChannelUser::find_by_id((channel_id, user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::channel_user::ActiveModel = existing.into();
        active.role = ActiveValue::Set(role);
        let updated = active.update(self.db).await?;

        Ok(Some(Membership::from_entity(updated)))
    }

    /// Removes a user from a channel. Returns true if a membership was deleted.
    pub async fn remove(&self, channel_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChannelUser::delete_by_id((channel_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_members(&self, channel_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ChannelUser::find()
            .filter(entity::channel_user::Column::ChannelId.eq(channel_id))
            .count(self.db)
            .await
    }

    pub async fn count_admins(&self, channel_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ChannelUser::find()
            .filter(entity::channel_user::Column::ChannelId.eq(channel_id))
            .filter(entity::channel_user::Column::Role.eq(ChannelRole::Admin))
            .count(self.db)
            .await
    }

    /// Gets the members of a channel with their usernames, oldest members first.
    pub async fn get_members(&self, channel_id: i32) -> Result<Vec<Member>, DbErr> {
        let rows = entity::prelude::ChannelUser::find()
            .filter(entity::channel_user::Column::ChannelId.eq(channel_id))
            .order_by_asc(entity::channel_user::Column::JoinedAt)
            .order_by_asc(entity::channel_user::Column::UserId)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| user.map(|u| Member::from_entity(membership, u)))
            .collect())
    }

    /// Gets all memberships of a user.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Membership>, DbErr> {
        let rows = entity::prelude::ChannelUser::find()
            .filter(entity::channel_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Membership::from_entity).collect())
    }
}
