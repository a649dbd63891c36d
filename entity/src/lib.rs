pub mod prelude;

pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod sea_orm_active_enums;
pub mod user;
pub mod workspace;
