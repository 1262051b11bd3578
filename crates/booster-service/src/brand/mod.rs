//! Brand management, membership and invitations.

pub mod service;

pub use service::{BrandService, BrandWithMembers, InviteOutcome, UpdateBrandRequest};
