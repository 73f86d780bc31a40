use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{
        salon_service::{CreateSalonServiceParam, UpdateSalonServiceParam},
        user::User,
    },
    service::catalog::CatalogService,
};
use entity::prelude::{SalonService, User as UserEntity};
use test_utils::{builder::TestBuilder, factory};

mod modify;

fn new_entry(staff_id: Option<i32>) -> CreateSalonServiceParam {
    CreateSalonServiceParam {
        name: "Manicure simples".to_string(),
        description: None,
        price: 35.0,
        duration: "45min".to_string(),
        staff_id,
        add_ons: Vec::new(),
    }
}
