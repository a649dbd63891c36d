pub use super::document::Entity as Document;
pub use super::flag::Entity as Flag;
pub use super::notification::Entity as Notification;
pub use super::organization::Entity as Organization;
pub use super::user::Entity as User;
pub use super::workspace::Entity as Workspace;
