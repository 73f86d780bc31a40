use crate::{
    model::user::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
    },
};
use entity::sea_orm_active_enums::UserRole as StoredRole;
use test_utils::{builder::TestBuilder, factory};

mod require;
