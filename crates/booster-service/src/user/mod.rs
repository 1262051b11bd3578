//! User registration, login and administration.

pub mod service;

pub use service::{LoginResult, RegisterUser, UserService, UserWithBrands};
