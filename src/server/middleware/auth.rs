//! Request authorization.
//!
//! `AuthGuard` resolves the logged-in user from the session and checks a list of
//! `Permission`s against it. Global admins pass every channel check.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{channel::ChannelRepository, membership::MembershipRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// Global admin flag.
    Admin,
    /// Any membership in the channel.
    ChannelMember(i32),
    /// Admin role in the channel.
    ChannelAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every permission in `permissions`.
    ///
    /// Channel permissions are checked against an existing channel first, so a
    /// request for a missing channel yields 404 rather than 403.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    /// - `Err(AppError::NotFound)` - A channel permission names a missing channel
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin operation without the admin flag".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ChannelMember(channel_id) => {
                    self.check_channel(&user, *channel_id, false).await?;
                }
                Permission::ChannelAdmin(channel_id) => {
                    self.check_channel(&user, *channel_id, true).await?;
                }
            }
        }

        Ok(user)
    }

    async fn check_channel(
        &self,
        user: &User,
        channel_id: i32,
        require_admin: bool,
    ) -> Result<(), AppError> {
        if ChannelRepository::new(self.db)
            .get_by_id(channel_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Channel not found".to_string()));
        }

        if user.admin {
            return Ok(());
        }

        let membership = MembershipRepository::new(self.db)
            .find(channel_id, user.id)
            .await?;

        match membership {
            Some(m) if !require_admin || m.is_admin() => Ok(()),
            Some(_) => Err(AuthError::AccessDenied(
                user.id,
                format!("User is not an admin of channel {}", channel_id),
            )
            .into()),
            None => Err(AuthError::AccessDenied(
                user.id,
                format!("User is not a member of channel {}", channel_id),
            )
            .into()),
        }
    }
}
