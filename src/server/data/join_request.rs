//! Join request repository.
//!
//! A join request spans two tables: `request` (status and resolution) and
//! `bind_request_channel_user` (which channel, which user). Reads load the binding rows
//! first and then the request, channel and user rows in batch queries.

use chrono::Utc;
use entity::{channel_user::ChannelRole, request::RequestStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::join_request::{CreateJoinRequestParams, JoinRequest, RequestDecision};

pub struct JoinRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending join request and its channel/user binding in one transaction.
    pub async fn create(&self, params: CreateJoinRequestParams) -> Result<JoinRequest, DbErr> {
        let txn = self.db.begin().await?;

        let request = entity::request::ActiveModel {
            status: ActiveValue::Set(RequestStatus::Pending),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            resolved_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::bind_request_channel_user::ActiveModel {
            request_id: ActiveValue::Set(request.id),
            channel_id: ActiveValue::Set(params.channel_id),
            user_id: ActiveValue::Set(params.user_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        self.get_by_id(request.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Join request with id {} not found after creation",
                request.id
            )))
    }

    /// Gets a join request by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<JoinRequest>, DbErr> {
        let bindings = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::RequestId.eq(id))
            .all(self.db)
            .await?;

        Ok(self.assemble(bindings).await?.pop())
    }

    /// Checks whether the user already has a pending request for the channel
    pub async fn has_pending(&self, channel_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let request_ids: Vec<i32> = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::ChannelId.eq(channel_id))
            .filter(entity::bind_request_channel_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| b.request_id)
            .collect();

        if request_ids.is_empty() {
            return Ok(false);
        }

        let pending = entity::prelude::Request::find()
            .filter(entity::request::Column::Id.is_in(request_ids))
            .filter(entity::request::Column::Status.eq(RequestStatus::Pending))
            .one(self.db)
            .await?;

        Ok(pending.is_some())
    }

    /// Gets requests for a channel with the given status, oldest first
    pub async fn get_by_channel(
        &self,
        channel_id: i32,
        status: RequestStatus,
    ) -> Result<Vec<JoinRequest>, DbErr> {
        let bindings = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::ChannelId.eq(channel_id))
            .all(self.db)
            .await?;

        let mut requests: Vec<JoinRequest> = self
            .assemble(bindings)
            .await?
            .into_iter()
            .filter(|r| r.status == status)
            .collect();
        requests.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(requests)
    }

    /// Gets all requests made by a user, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<JoinRequest>, DbErr> {
        let bindings = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let mut requests = self.assemble(bindings).await?;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(requests)
    }

    /// Records the decision on a pending request.
    ///
    /// Sets status, `resolved_at` and `resolved_by` only while the request is still
    /// Pending, so of two concurrent decisions exactly one takes effect. On approval
    /// the requester is added to the channel as a Member unless already a member.
    /// Runs in one transaction.
    ///
    /// # Arguments
    /// - `id` - Request ID
    /// - `decision` - Approve or reject
    /// - `resolver_id` - User ID of the deciding channel admin
    ///
    /// # Returns
    /// - `Ok(Some(JoinRequest))` - The resolved request
    /// - `Ok(None)` - No pending request with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn resolve(
        &self,
        id: i32,
        decision: RequestDecision,
        resolver_id: i32,
    ) -> Result<Option<JoinRequest>, DbErr> {
        let Some(binding) = entity::prelude::BindRequestChannelUser::find()
            .filter(entity::bind_request_channel_user::Column::RequestId.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let updated = entity::prelude::Request::update_many()
            .set(entity::request::ActiveModel {
                status: ActiveValue::Set(decision.status()),
                resolved_at: ActiveValue::Set(Some(Utc::now())),
                resolved_by: ActiveValue::Set(Some(resolver_id)),
                ..Default::default()
            })
            .filter(entity::request::Column::Id.eq(id))
            .filter(entity::request::Column::Status.eq(RequestStatus::Pending))
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        if decision == RequestDecision::Approve {
            let existing =
                entity::prelude::ChannelUser::find_by_id((binding.channel_id, binding.user_id))
                    .one(&txn)
                    .await?;

            if existing.is_none() {
                entity::channel_user::ActiveModel {
                    channel_id: ActiveValue::Set(binding.channel_id),
                    user_id: ActiveValue::Set(binding.user_id),
                    role: ActiveValue::Set(ChannelRole::Member),
                    joined_at: ActiveValue::Set(Utc::now()),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        self.get_by_id(id).await
    }

    /// Deletes a request; its binding row cascades
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Request::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads request, channel and user rows for a set of bindings.
    async fn assemble(
        &self,
        bindings: Vec<entity::bind_request_channel_user::Model>,
    ) -> Result<Vec<JoinRequest>, DbErr> {
        if bindings.is_empty() {
            return Ok(Vec::new());
        }

        let request_ids: Vec<i32> = bindings.iter().map(|b| b.request_id).collect();
        let channel_ids: Vec<i32> = bindings.iter().map(|b| b.channel_id).collect();
        let user_ids: Vec<i32> = bindings.iter().map(|b| b.user_id).collect();

        let mut requests: HashMap<i32, entity::request::Model> = entity::prelude::Request::find()
            .filter(entity::request::Column::Id.is_in(request_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let channel_names: HashMap<i32, String> = entity::prelude::Channel::find()
            .filter(entity::channel::Column::Id.is_in(channel_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let usernames: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        Ok(bindings
            .into_iter()
            .filter_map(|binding| {
                let request = requests.remove(&binding.request_id)?;
                let channel_name = channel_names.get(&binding.channel_id)?.clone();
                let username = usernames.get(&binding.user_id)?.clone();
                Some(JoinRequest::from_entity(
                    request,
                    binding,
                    channel_name,
                    username,
                ))
            })
            .collect())
    }
}
