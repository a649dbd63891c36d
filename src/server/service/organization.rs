//! Organization service for business logic.
//!
//! Orchestrates organization registration (organization plus its first admin
//! user), slug-based lookups, and adding members to an existing organization.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{organization::OrganizationRepository, user::UserRepository},
    error::AppError,
    model::{
        organization::{CreateOrganizationParam, CreateOrgWithUserParam, Organization},
        user::{AddUserParam, CreateUserParam, User},
    },
};

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an organization together with its first admin user.
    ///
    /// The slug is generated from the organization name and checked for
    /// uniqueness before the insert; the check and the insert are separate
    /// statements, so concurrent registrations of the same name can race.
    /// The organization and user inserts are not wrapped in a transaction
    /// either: if the user insert fails the organization row remains.
    ///
    /// # Returns
    /// - `Ok((Organization, User))` - The created organization and admin user
    /// - `Err(AppError::Validation)` - Field bounds violated
    /// - `Err(AppError::AlreadyExists)` - Slug already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_with_user(
        &self,
        param: CreateOrgWithUserParam,
    ) -> Result<(Organization, User), AppError> {
        validate_length("name", &param.name, 2, 100)?;
        validate_length("user_name", &param.user_name, 2, 100)?;
        validate_email(&param.user_email)?;

        let slug = generate_slug(&param.name);
        if slug.is_empty() {
            return Err(AppError::Validation(
                "name must contain at least one alphanumeric character".to_string(),
            ));
        }

        let org_repo = OrganizationRepository::new(self.db);
        if org_repo.get_by_slug(&slug).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "organization with slug '{slug}' already exists"
            )));
        }

        let org = org_repo
            .create(CreateOrganizationParam {
                name: param.name,
                slug,
                confluence_base_url: param.confluence_base_url,
                confluence_email: param.confluence_email,
                confluence_token: param.confluence_token,
                confluence_space_key: param.confluence_space_key,
            })
            .await?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .create(CreateUserParam {
                email: param.user_email,
                name: param.user_name,
                org_id: org.id,
                role: UserRole::Admin,
            })
            .await?;

        Ok((org, user))
    }

    /// Looks up an organization by slug.
    ///
    /// # Returns
    /// - `Ok(Organization)` - Organization found
    /// - `Err(AppError::NotFound)` - No organization with that slug
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<Organization, AppError> {
        let org_repo = OrganizationRepository::new(self.db);

        org_repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))
    }

    /// Adds a user to an existing organization.
    ///
    /// Email uniqueness is checked before the insert (check-then-create, same
    /// race caveat as `create_with_user`).
    ///
    /// # Returns
    /// - `Ok(User)` - The created active user
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::AlreadyExists)` - Email already taken
    /// - `Err(AppError::Validation)` - Field bounds violated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_user(&self, param: AddUserParam) -> Result<User, AppError> {
        validate_length("name", &param.name, 2, 100)?;
        validate_email(&param.email)?;

        let org_repo = OrganizationRepository::new(self.db);
        let org = org_repo
            .get_by_id(param.org_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_email(&param.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "user with email '{}' already exists",
                param.email
            )));
        }

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                name: param.name,
                org_id: org.id,
                role: param.role.unwrap_or(UserRole::Member),
            })
            .await?;

        Ok(user)
    }

    /// Lists the active users of an organization.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Active users
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_users(&self, org_id: uuid::Uuid) -> Result<Vec<User>, AppError> {
        let org_repo = OrganizationRepository::new(self.db);
        if org_repo.get_by_id(org_id).await?.is_none() {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_by_org_id(org_id).await?;

        Ok(users)
    }
}

/// Derives a URL-safe slug from an organization's display name.
///
/// Lowercases, turns "&" into "and" (swallowing a following space), turns
/// remaining spaces into hyphens, and strips everything outside `[a-z0-9-]`.
/// Deterministic and pure.
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .replace("& ", "and")
        .replace('&', "and")
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(AppError::Validation(format!("invalid email '{email}'")));
    }
    Ok(())
}
