//! Join request workflow for private channels.

use entity::request::RequestStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        channel::ChannelRepository, join_request::JoinRequestRepository,
        membership::MembershipRepository,
    },
    error::{auth::AuthError, AppError},
    model::join_request::{
        CreateJoinRequestParams, JoinRequest, RequestDecision, MAX_REQUEST_MESSAGE_LENGTH,
    },
    util::validate,
};

pub struct JoinRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Asks to join a private channel.
    ///
    /// # Returns
    /// - `Ok(JoinRequest)` - The pending request
    /// - `Err(AppError::NotFound)` - Channel doesn't exist
    /// - `Err(AppError::BadRequest)` - Channel is public, or the note is too long
    /// - `Err(AppError::Conflict)` - Already a member, or a request is already pending
    pub async fn create(&self, params: CreateJoinRequestParams) -> Result<JoinRequest, AppError> {
        validate::optional_max_length(
            "Message",
            params.message.as_deref(),
            MAX_REQUEST_MESSAGE_LENGTH,
        )?;

        let Some(channel) = ChannelRepository::new(self.db)
            .get_by_id(params.channel_id)
            .await?
        else {
            return Err(AppError::NotFound("Channel not found".to_string()));
        };

        if !channel.is_private {
            return Err(AppError::BadRequest(
                "This channel is public, join it directly".to_string(),
            ));
        }

        if MembershipRepository::new(self.db)
            .find(params.channel_id, params.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You are already a member of this channel".to_string(),
            ));
        }

        let repo = JoinRequestRepository::new(self.db);

        if repo.has_pending(params.channel_id, params.user_id).await? {
            return Err(AppError::Conflict(
                "You already have a pending request for this channel".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Lists a channel's requests with the given status, oldest first
    pub async fn list_for_channel(
        &self,
        channel_id: i32,
        status: RequestStatus,
    ) -> Result<Vec<JoinRequest>, AppError> {
        Ok(JoinRequestRepository::new(self.db)
            .get_by_channel(channel_id, status)
            .await?)
    }

    /// Lists the user's own requests, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<JoinRequest>, AppError> {
        Ok(JoinRequestRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Approves or rejects a pending request of `channel_id`.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the caller administers
    /// - `request_id` - Request to resolve
    /// - `decision` - Approve or reject
    /// - `resolver_id` - Caller's user ID, recorded as `resolved_by`
    ///
    /// # Returns
    /// - `Ok(JoinRequest)` - The resolved request
    /// - `Err(AppError::NotFound)` - No such request in this channel
    /// - `Err(AppError::BadRequest)` - Request was already resolved
    pub async fn resolve(
        &self,
        channel_id: i32,
        request_id: i32,
        decision: RequestDecision,
        resolver_id: i32,
    ) -> Result<JoinRequest, AppError> {
        let repo = JoinRequestRepository::new(self.db);

        let request = repo
            .get_by_id(request_id)
            .await?
            .filter(|r| r.channel_id == channel_id)
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;

        if !request.is_pending() {
            return Err(AppError::BadRequest(
                "Join request was already resolved".to_string(),
            ));
        }

        // Another admin may have decided in the meantime
        let resolved = repo
            .resolve(request_id, decision, resolver_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("Join request was already resolved".to_string())
            })?;

        tracing::debug!(
            "Join request {} for channel {} resolved as {:?} by {}",
            request_id,
            channel_id,
            resolved.status,
            resolver_id
        );

        Ok(resolved)
    }

    /// Cancels the caller's own pending request.
    ///
    /// # Returns
    /// - `Ok(())` - Request deleted
    /// - `Err(AppError::NotFound)` - No such request
    /// - `Err(AuthError::AccessDenied)` - Request belongs to someone else
    /// - `Err(AppError::BadRequest)` - Request is no longer pending
    pub async fn cancel(&self, request_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = JoinRequestRepository::new(self.db);

        let Some(request) = repo.get_by_id(request_id).await? else {
            return Err(AppError::NotFound("Join request not found".to_string()));
        };

        if request.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User tried to cancel join request {} of another user", request_id),
            )
            .into());
        }

        if !request.is_pending() {
            return Err(AppError::BadRequest(
                "Only pending requests can be cancelled".to_string(),
            ));
        }

        repo.delete(request_id).await?;

        Ok(())
    }
}
