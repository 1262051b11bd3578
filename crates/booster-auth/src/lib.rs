//! # booster-auth
//!
//! Authentication and authorization building blocks for Booster.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and policy enforcement
//! - `jwt`: signed bearer token encoding and decoding
//! - `token`: token issuance, revocation and expired-token cleanup
//! - `acl`: admin and brand membership checks

pub mod acl;
pub mod jwt;
pub mod password;
pub mod token;

pub use acl::BrandAccess;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use token::{TokenCleanup, TokenManager};
