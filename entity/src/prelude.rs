pub use super::appointment::Entity as Appointment;
pub use super::salon_info::Entity as SalonInfo;
pub use super::salon_service::Entity as SalonService;
pub use super::user::Entity as User;
