//! Role-based access guard.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// User must be an admin.
    Admin,
    /// User must be a manicure or an admin.
    Staff,
}

impl Permission {
    fn is_granted_to(&self, role: UserRole) -> bool {
        match self {
            Self::Admin => role == UserRole::Admin,
            Self::Staff => matches!(role, UserRole::Manicure | UserRole::Admin),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Admin => "admin role required",
            Self::Staff => "manicure or admin role required",
        }
    }
}

/// Resolves the logged in user and checks their role.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user if they satisfy every permission.
    ///
    /// An empty permission list only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with all required permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is not granted
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !permission.is_granted_to(user.role) {
                return Err(
                    AuthError::AccessDenied(user.id, permission.describe().to_string()).into(),
                );
            }
        }

        Ok(user)
    }
}
