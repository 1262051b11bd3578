//! Brand service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use booster_core::error::AppError;
use booster_core::traits::storage::ObjectStore;
use booster_core::types::slugify;
use booster_database::repositories::{
    BrandRepository, ImageRepository, OnboardingRepository, UserRepository,
};
use booster_entity::audit::{LogAction, LogEntry, RefType};
use booster_entity::brand::{Brand, CreateBrand, OnboardingUser, UpdateBrand};
use booster_entity::user::User;

use crate::audit::{AuditService, snapshot};
use crate::context::RequestContext;

/// A brand together with its members.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandWithMembers {
    /// The brand.
    #[serde(flatten)]
    pub brand: Brand,
    /// Members in the order they joined.
    pub users: Vec<User>,
}

/// Partial brand update.
#[derive(Debug, Clone, Default)]
pub struct UpdateBrandRequest {
    /// New name; the slug follows it.
    pub name: Option<String>,
    /// New verification flag. Admin only.
    pub verified: Option<bool>,
    /// Replacement member set.
    pub users: Option<Vec<Uuid>>,
}

/// Result of inviting someone to a brand.
#[derive(Debug, Clone)]
pub enum InviteOutcome {
    /// The email belonged to an account, which is now a member.
    Added {
        /// The brand after the change.
        brand: BrandWithMembers,
        /// The new member.
        user: User,
    },
    /// No account uses the email yet; an invitation is pending.
    Invited {
        /// The brand.
        brand: BrandWithMembers,
        /// The pending invitation.
        onboarding: OnboardingUser,
    },
}

/// Manages brands and their members.
#[derive(Debug, Clone)]
pub struct BrandService {
    brands: Arc<BrandRepository>,
    users: Arc<UserRepository>,
    onboarding: Arc<OnboardingRepository>,
    images: Arc<ImageRepository>,
    store: Arc<dyn ObjectStore>,
    audit: Arc<AuditService>,
}

impl BrandService {
    /// Creates a new brand service.
    pub fn new(
        brands: Arc<BrandRepository>,
        users: Arc<UserRepository>,
        onboarding: Arc<OnboardingRepository>,
        images: Arc<ImageRepository>,
        store: Arc<dyn ObjectStore>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            brands,
            users,
            onboarding,
            images,
            store,
            audit,
        }
    }

    /// Every brand with its members.
    pub async fn list(&self) -> Result<Vec<BrandWithMembers>, AppError> {
        let brands = self.brands.find_all().await?;
        let ids: Vec<Uuid> = brands.iter().map(|b| b.id).collect();
        let mut members: HashMap<Uuid, Vec<User>> = HashMap::new();
        for member in self.brands.find_members_of(&ids).await? {
            members.entry(member.brand_id).or_default().push(member.user);
        }

        Ok(brands
            .into_iter()
            .map(|brand| {
                let users = members.remove(&brand.id).unwrap_or_default();
                BrandWithMembers { brand, users }
            })
            .collect())
    }

    /// Brands the caller is a member of.
    pub async fn my_brands(&self, ctx: &RequestContext) -> Result<Vec<Brand>, AppError> {
        self.brands.find_for_user(ctx.user_id()).await
    }

    /// Loads a brand or fails with not-found.
    pub async fn get(&self, brand_id: Uuid) -> Result<Brand, AppError> {
        self.brands
            .find_by_id(brand_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Brand {brand_id} not found")))
    }

    /// A brand with its members.
    pub async fn get_with_members(&self, brand_id: Uuid) -> Result<BrandWithMembers, AppError> {
        let brand = self.get(brand_id).await?;
        let users = self.brands.find_members(brand_id).await?;
        Ok(BrandWithMembers { brand, users })
    }

    /// A brand and its audit trail. Requires brand access.
    pub async fn get_with_logs(
        &self,
        ctx: &RequestContext,
        brand_id: Uuid,
    ) -> Result<(Brand, Vec<LogEntry>), AppError> {
        let brand = self.get(brand_id).await?;
        ctx.require_brand(brand.id)?;
        let logs = self.audit.logs_for(RefType::Brand, brand.id).await?;
        Ok((brand, logs))
    }

    /// Creates a brand. Admin only.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> Result<Brand, AppError> {
        ctx.require_admin()?;

        let name = name.trim();
        let slug = slugify(name);
        if name.chars().count() < 2 || slug.is_empty() {
            return Err(AppError::invalid_field("name"));
        }

        let brand = self
            .brands
            .create(&CreateBrand {
                name: name.to_string(),
                slug,
            })
            .await?;

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Brand,
                brand.id,
                LogAction::Create,
                None,
                snapshot(&brand),
            )
            .await;

        info!(brand_id = %brand.id, user_id = %ctx.user_id(), "Brand created");
        Ok(brand)
    }

    /// Updates a brand. Requires brand access; `verified` requires admin.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        brand_id: Uuid,
        req: UpdateBrandRequest,
    ) -> Result<BrandWithMembers, AppError> {
        let before = self.get_with_members(brand_id).await?;
        ctx.require_brand(brand_id)?;

        if let Some(verified) = req.verified {
            if verified != before.brand.verified && !ctx.is_admin() {
                return Err(AppError::authorization(
                    "Only administrators can change brand verification",
                ));
            }
        }

        let mut changes = UpdateBrand {
            verified: req.verified,
            ..UpdateBrand::default()
        };
        if let Some(name) = req.name.as_deref() {
            let name = name.trim();
            let slug = slugify(name);
            if name.chars().count() < 2 || slug.is_empty() {
                return Err(AppError::invalid_field("name"));
            }
            changes.name = Some(name.to_string());
            changes.slug = Some(slug);
        }

        if let Some(user_ids) = req.users.as_deref() {
            self.brands.replace_members(brand_id, user_ids).await?;
        }
        self.brands.update(brand_id, &changes).await?;

        let after = self.get_with_members(brand_id).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Brand,
                brand_id,
                LogAction::Update,
                snapshot(&before),
                snapshot(&after),
            )
            .await;

        info!(brand_id = %brand_id, user_id = %ctx.user_id(), "Brand updated");
        Ok(after)
    }

    /// Adds an existing account to a brand, or records an invitation for an
    /// unknown email. Requires brand access.
    pub async fn invite(
        &self,
        ctx: &RequestContext,
        brand_id: Uuid,
        email: &str,
    ) -> Result<InviteOutcome, AppError> {
        let before = self.get_with_members(brand_id).await?;
        ctx.require_brand(brand_id)?;

        let email = email.trim();
        if let Some(user) = self.users.find_by_email(email).await? {
            self.brands.add_member(brand_id, user.id).await?;
            let after = self.get_with_members(brand_id).await?;

            self.audit
                .record(
                    Some(ctx.user_id()),
                    RefType::Brand,
                    brand_id,
                    LogAction::Update,
                    snapshot(&before),
                    snapshot(&after),
                )
                .await;

            info!(brand_id = %brand_id, member_id = %user.id, "User added to brand");
            return Ok(InviteOutcome::Added { brand: after, user });
        }

        let onboarding = self.onboarding.create(email, brand_id).await?;
        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::OnboardingUser,
                onboarding.id,
                LogAction::Create,
                None,
                snapshot(&onboarding),
            )
            .await;

        info!(
            brand_id = %brand_id,
            onboarding_id = %onboarding.id,
            "Onboarding invitation recorded"
        );
        Ok(InviteOutcome::Invited {
            brand: before,
            onboarding,
        })
    }

    /// Deletes a brand with its products and images. Requires brand access.
    ///
    /// Image blobs are removed after the rows; failures are only logged.
    pub async fn delete(&self, ctx: &RequestContext, brand_id: Uuid) -> Result<(), AppError> {
        let before = self.get_with_members(brand_id).await?;
        ctx.require_brand(brand_id)?;

        let images = self.images.find_by_brand(brand_id).await?;
        if !self.brands.delete(brand_id).await? {
            return Err(AppError::not_found(format!("Brand {brand_id} not found")));
        }

        for image in &images {
            if let Err(e) = self.store.delete(&image.storage_key).await {
                warn!(
                    image_id = %image.id,
                    key = %image.storage_key,
                    error = %e,
                    "Failed to delete image blob"
                );
            }
        }

        self.audit
            .record(
                Some(ctx.user_id()),
                RefType::Brand,
                brand_id,
                LogAction::Delete,
                snapshot(&before),
                None,
            )
            .await;

        info!(
            brand_id = %brand_id,
            user_id = %ctx.user_id(),
            images = images.len(),
            "Brand deleted"
        );
        Ok(())
    }
}
