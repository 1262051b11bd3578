//! User service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use booster_auth::token::IssuedToken;
use booster_auth::{PasswordHasher, PasswordValidator, TokenManager};
use booster_core::error::AppError;
use booster_database::repositories::{BrandRepository, UserRepository};
use booster_entity::audit::{LogAction, LogEntry, RefType};
use booster_entity::brand::Brand;
use booster_entity::user::{CreateUser, User};

use crate::audit::{AuditService, snapshot};
use crate::context::RequestContext;

/// A user together with the brands they belong to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserWithBrands {
    /// The user.
    #[serde(flatten)]
    pub user: User,
    /// Brands the user is a member of.
    pub brands: Vec<Brand>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Admin flag; only honoured for accounts created from the CLI.
    pub is_admin: bool,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// The issued bearer token.
    pub token: IssuedToken,
}

/// Manages accounts, logins and bearer tokens.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    brands: Arc<BrandRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    tokens: Arc<TokenManager>,
    audit: Arc<AuditService>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        brands: Arc<BrandRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenManager>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            users,
            brands,
            hasher,
            validator,
            tokens,
            audit,
        }
    }

    /// Creates an account.
    ///
    /// Pending brand invitations for the email are redeemed: the new user
    /// joins those brands and the invitations are removed.
    pub async fn register(&self, req: RegisterUser) -> Result<User, AppError> {
        let name = req.name.trim().to_string();
        let email = req.email.trim().to_string();
        if name.chars().count() < 2 {
            return Err(AppError::invalid_field("name"));
        }
        if !email.contains('@') {
            return Err(AppError::invalid_field("email"));
        }
        self.validator.validate(&req.password)?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let (user, joined) = self
            .users
            .create(&CreateUser {
                name,
                email,
                password_hash,
                is_admin: req.is_admin,
            })
            .await?;

        for brand_id in &joined {
            info!(user_id = %user.id, brand_id = %brand_id, "Onboarding invitation redeemed");
        }

        self.audit
            .record(
                Some(user.id),
                RefType::User,
                user.id,
                LogAction::Create,
                None,
                snapshot(&user),
            )
            .await;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let rejected = || AppError::invalid_credentials("Invalid email or password");

        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            warn!("Login attempt for unknown email");
            return Err(rejected());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(rejected());
        }

        let token = self.tokens.issue(user.id).await?;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { user, token })
    }

    /// Resolves a bearer token into a request context.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        let claims = self.tokens.authenticate(token).await?;
        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;
        let brand_ids = self.brands.brand_ids_for_user(user.id).await?;

        Ok(RequestContext::new(user, claims.token_id(), brand_ids))
    }

    /// Revokes the token the caller authenticated with.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.tokens.revoke(ctx.token_id).await?;
        info!(user_id = %ctx.user_id(), "User logged out");
        Ok(())
    }

    /// The caller's account with their brands.
    pub async fn me(&self, ctx: &RequestContext) -> Result<UserWithBrands, AppError> {
        let brands = self.brands.find_for_user(ctx.user_id()).await?;
        Ok(UserWithBrands {
            user: ctx.user.clone(),
            brands,
        })
    }

    /// Every account with its brands. Admin only.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<UserWithBrands>, AppError> {
        ctx.require_admin()?;
        self.all_with_brands().await
    }

    /// One account with its brands and audit trail. Admin only.
    pub async fn get_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
    ) -> Result<(UserWithBrands, Vec<LogEntry>), AppError> {
        ctx.require_admin()?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        let brands = self.brands.find_for_user(user.id).await?;
        let logs = self.audit.logs_for(RefType::User, user.id).await?;

        Ok((UserWithBrands { user, brands }, logs))
    }

    /// Every account with its brands, without an access check.
    pub async fn all_with_brands(&self) -> Result<Vec<UserWithBrands>, AppError> {
        let users = self.users.find_all().await?;
        let brands = self.brands.find_all().await?;
        let brand_ids: Vec<Uuid> = brands.iter().map(|b| b.id).collect();
        let members = self.brands.find_members_of(&brand_ids).await?;

        let by_id: HashMap<Uuid, &Brand> = brands.iter().map(|b| (b.id, b)).collect();
        let mut per_user: HashMap<Uuid, Vec<Brand>> = HashMap::new();
        for member in members {
            if let Some(brand) = by_id.get(&member.brand_id) {
                per_user
                    .entry(member.user.id)
                    .or_default()
                    .push((*brand).clone());
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let brands = per_user.remove(&user.id).unwrap_or_default();
                UserWithBrands { user, brands }
            })
            .collect())
    }

    /// Grants or withdraws admin rights by email.
    pub async fn set_admin(&self, email: &str, is_admin: bool) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

        let updated = self.users.set_admin(user.id, is_admin).await?;
        self.audit
            .record(
                None,
                RefType::User,
                user.id,
                LogAction::Update,
                snapshot(&user),
                snapshot(&updated),
            )
            .await;

        info!(user_id = %user.id, is_admin, "Admin flag changed");
        Ok(updated)
    }
}
