//! Decides whether a caller may act on a brand.

use uuid::Uuid;

use booster_core::error::AppError;

/// The access facts of an authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct BrandAccess<'a> {
    /// Whether the caller is an administrator.
    pub is_admin: bool,
    /// Brands the caller is a member of.
    pub brand_ids: &'a [Uuid],
}

impl<'a> BrandAccess<'a> {
    /// Creates an access view.
    pub fn new(is_admin: bool, brand_ids: &'a [Uuid]) -> Self {
        Self {
            is_admin,
            brand_ids,
        }
    }

    /// Administrators may act on every brand; members on their own.
    pub fn can_access(&self, brand_id: Uuid) -> bool {
        self.is_admin || self.brand_ids.contains(&brand_id)
    }

    /// Fails with an authorization error unless the caller is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::authorization("Administrator access required"))
        }
    }

    /// Fails with an authorization error unless the caller may act on `brand_id`.
    pub fn require_brand(&self, brand_id: Uuid) -> Result<(), AppError> {
        if self.can_access(brand_id) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "No access to brand {brand_id}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booster_core::error::ErrorKind;

    #[test]
    fn test_admin_reaches_every_brand() {
        let access = BrandAccess::new(true, &[]);
        assert!(access.can_access(Uuid::new_v4()));
        assert!(access.require_admin().is_ok());
    }

    #[test]
    fn test_member_limited_to_own_brands() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        let brands = [own];
        let access = BrandAccess::new(false, &brands);

        assert!(access.require_brand(own).is_ok());
        let err = access.require_brand(other).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_non_admin_rejected() {
        let err = BrandAccess::new(false, &[]).require_admin().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
