//! User domain models and parameters.
//!
//! Passwords travel in plain text only inside the `*Param` types built from request
//! bodies. The service hashes them before building the `*Record` types handed to the
//! repository, and the hash itself is never converted into a DTO.

use chrono::{DateTime, Utc};

use crate::model::user::{
    CreateUserDto, PaginatedUsersDto, RegisterUserDto, UpdateUserDto, UserDto, UserRole,
};

impl From<entity::sea_orm_active_enums::UserRole> for UserRole {
    fn from(role: entity::sea_orm_active_enums::UserRole) -> Self {
        use entity::sea_orm_active_enums::UserRole as Stored;

        match role {
            Stored::Client => Self::Client,
            Stored::Manicure => Self::Manicure,
            Stored::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for entity::sea_orm_active_enums::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Client => Self::Client,
            UserRole::Manicure => Self::Manicure,
            UserRole::Admin => Self::Admin,
        }
    }
}

/// Registered account: a client, a manicure or an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            role: entity.role.into(),
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Manicures and admins count as staff.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, UserRole::Manicure | UserRole::Admin)
    }
}

/// Parameters for creating an account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: UserRole,
}

impl CreateUserParam {
    /// Self-registration always creates a client.
    pub fn from_register_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password: dto.password,
            role: UserRole::Client,
        }
    }

    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password: dto.password,
            role: dto.role,
        }
    }
}

/// Row inserted by the repository once the password has been hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

/// Partial user update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub password: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            role: dto.role,
            password: dto.password,
        }
    }
}

/// Column changes applied by the repository, with the password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserRecordChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub password_hash: Option<String>,
}

/// Page of users with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
