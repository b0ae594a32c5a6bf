//! Channel membership rules.
//!
//! Every operation that could remove or demote an Admin checks that the channel keeps
//! at least one Admin while it still has other members.

use entity::channel_user::ChannelRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{channel::ChannelRepository, membership::MembershipRepository},
    error::AppError,
    model::membership::{Member, Membership, UserChannel},
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn members(&self, channel_id: i32) -> Result<Vec<Member>, AppError> {
        Ok(MembershipRepository::new(self.db)
            .get_members(channel_id)
            .await?)
    }

    /// Joins a public channel as a Member.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The new membership
    /// - `Err(AppError::NotFound)` - Channel doesn't exist
    /// - `Err(AppError::BadRequest)` - Channel is private
    /// - `Err(AppError::Conflict)` - Already a member
    pub async fn join(&self, channel_id: i32, user_id: i32) -> Result<Membership, AppError> {
        let Some(channel) = ChannelRepository::new(self.db).get_by_id(channel_id).await? else {
            return Err(AppError::NotFound("Channel not found".to_string()));
        };

        if channel.is_private {
            return Err(AppError::BadRequest(
                "This channel is private, send a join request instead".to_string(),
            ));
        }

        let repo = MembershipRepository::new(self.db);

        if repo.find(channel_id, user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "You are already a member of this channel".to_string(),
            ));
        }

        Ok(repo.add(channel_id, user_id, ChannelRole::Member).await?)
    }

    /// Leaves a channel.
    ///
    /// The last Admin can only leave once nobody else is left; the channel then
    /// stays, empty.
    pub async fn leave(&self, channel_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = MembershipRepository::new(self.db);

        let Some(membership) = repo.find(channel_id, user_id).await? else {
            return Err(AppError::NotFound(
                "You are not a member of this channel".to_string(),
            ));
        };

        if membership.is_admin()
            && repo.count_admins(channel_id).await? <= 1
            && repo.count_members(channel_id).await? > 1
        {
            return Err(AppError::BadRequest(
                "Promote another member to admin before leaving".to_string(),
            ));
        }

        repo.remove(channel_id, user_id).await?;

        Ok(())
    }

    /// Changes a member's role.
    ///
    /// # Returns
    /// - `Ok(Membership)` - Updated membership
    /// - `Err(AppError::NotFound)` - Target is not a member
    /// - `Err(AppError::BadRequest)` - Demoting the last Admin
    pub async fn set_role(
        &self,
        channel_id: i32,
        user_id: i32,
        role: ChannelRole,
    ) -> Result<Membership, AppError> {
        let repo = MembershipRepository::new(self.db);

        let Some(membership) = repo.find(channel_id, user_id).await? else {
            return Err(AppError::NotFound(
                "User is not a member of this channel".to_string(),
            ));
        };

        if membership.is_admin()
            && role == ChannelRole::Member
            && repo.count_admins(channel_id).await? <= 1
        {
            return Err(AppError::BadRequest(
                "Cannot demote the last admin of the channel".to_string(),
            ));
        }

        repo.set_role(channel_id, user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User is not a member of this channel".to_string()))
    }

    /// Removes a member from the channel; the last Admin can't be removed.
    pub async fn remove_member(&self, channel_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = MembershipRepository::new(self.db);

        let Some(membership) = repo.find(channel_id, user_id).await? else {
            return Err(AppError::NotFound(
                "User is not a member of this channel".to_string(),
            ));
        };

        if membership.is_admin() && repo.count_admins(channel_id).await? <= 1 {
            return Err(AppError::BadRequest(
                "Cannot remove the last admin of the channel".to_string(),
            ));
        }

        repo.remove(channel_id, user_id).await?;

        Ok(())
    }

    /// Gets the channels a user belongs to with their role, ordered by channel name.
    pub async fn user_channels(&self, user_id: i32) -> Result<Vec<UserChannel>, AppError> {
        let memberships = MembershipRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let channels = ChannelRepository::new(self.db)
            .get_by_ids(memberships.iter().map(|m| m.channel_id).collect())
            .await?;

        Ok(channels
            .into_iter()
            .filter_map(|channel| {
                memberships
                    .iter()
                    .find(|m| m.channel_id == channel.id)
                    .map(|m| UserChannel {
                        role: m.role,
                        joined_at: m.joined_at,
                        channel,
                    })
            })
            .collect())
    }
}
