use crate::{
    model::user::UserRole,
    server::{
        config::AdminSeedConfig,
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
    },
};
use entity::prelude::User as UserEntity;
use test_utils::{builder::TestBuilder, factory};

mod account;
mod seed_admin;

fn registration(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Maria".to_string(),
        email: email.to_string(),
        phone: Some(" 11999990000 ".to_string()),
        password: "segredo123".to_string(),
        role: UserRole::Client,
    }
}
