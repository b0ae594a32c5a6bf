//! Join request domain models and parameters.
//!
//! A join request is stored as a `request` row holding the status and resolution data,
//! plus a `bind_request_channel_user` row linking it to the channel and the requester.

use chrono::{DateTime, Utc};
use entity::request::RequestStatus;

use crate::model::join_request::{CreateJoinRequestDto, JoinRequestDto, RequestStatusDto};

/// Maximum length of the optional note attached to a join request.
pub const MAX_REQUEST_MESSAGE_LENGTH: usize = 500;

/// Join request with the channel and requester it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequest {
    pub id: i32,
    pub channel_id: i32,
    pub channel_name: String,
    pub user_id: i32,
    pub username: String,
    pub status: RequestStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// User ID of the channel admin who approved or rejected the request.
    pub resolved_by: Option<i32>,
}

impl JoinRequest {
    /// Assembles a join request from its request row, binding row and related names.
    pub fn from_entity(
        request: entity::request::Model,
        binding: entity::bind_request_channel_user::Model,
        channel_name: String,
        username: String,
    ) -> Self {
        Self {
            id: request.id,
            channel_id: binding.channel_id,
            channel_name,
            user_id: binding.user_id,
            username,
            status: request.status,
            message: request.message,
            created_at: request.created_at,
            resolved_at: request.resolved_at,
            resolved_by: request.resolved_by,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn into_dto(self) -> JoinRequestDto {
        JoinRequestDto {
            id: self.id,
            channel_id: self.channel_id,
            channel_name: self.channel_name,
            user_id: self.user_id,
            username: self.username,
            status: self.status.into(),
            message: self.message,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
            resolved_by: self.resolved_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJoinRequestParams {
    pub channel_id: i32,
    pub user_id: i32,
    pub message: Option<String>,
}

impl CreateJoinRequestParams {
    pub fn from_dto(channel_id: i32, user_id: i32, dto: CreateJoinRequestDto) -> Self {
        Self {
            channel_id,
            user_id,
            message: dto
                .message
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
        }
    }
}

/// Outcome chosen by a channel admin for a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDecision {
    Approve,
    Reject,
}

impl RequestDecision {
    pub fn status(self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

impl From<RequestStatus> for RequestStatusDto {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => RequestStatusDto::Pending,
            RequestStatus::Approved => RequestStatusDto::Approved,
            RequestStatus::Rejected => RequestStatusDto::Rejected,
        }
    }
}

impl From<RequestStatusDto> for RequestStatus {
    fn from(status: RequestStatusDto) -> Self {
        match status {
            RequestStatusDto::Pending => RequestStatus::Pending,
            RequestStatusDto::Approved => RequestStatus::Approved,
            RequestStatusDto::Rejected => RequestStatus::Rejected,
        }
    }
}
