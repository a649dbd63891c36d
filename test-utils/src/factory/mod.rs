//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories automatically
//! create missing dependencies (a flag factory with no document creates the
//! whole organization → workspace → document chain), keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let org = factory::organization::create_organization(&db).await?;
//!     let user = factory::user::create_user(&db, org.id).await?;
//!
//!     // Create with the full dependency chain
//!     let (org, user, workspace, document, flag) =
//!         factory::helpers::create_flag_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let flag = factory::flag::FlagFactory::new(&db)
//!     .document_id(document.id)
//!     .created_by(user.id)
//!     .title("Broken login steps")
//!     .priority(FlagPriority::High)
//!     .build()
//!     .await?;
//! ```

pub mod document;
pub mod flag;
pub mod helpers;
pub mod notification;
pub mod organization;
pub mod user;
pub mod workspace;

// Re-export commonly used factory functions for concise usage
pub use document::create_document;
pub use flag::create_flag;
pub use notification::create_notification;
pub use organization::create_organization;
pub use user::create_user;
pub use workspace::create_workspace;
