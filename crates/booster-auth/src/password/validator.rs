//! Password policy enforcement for new passwords.

use booster_core::config::AuthConfig;
use booster_core::error::AppError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
    /// Whether to reject passwords zxcvbn scores below 3.
    require_strong: bool,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            require_strong: config.require_strong_passwords,
        }
    }

    /// Validates a password, reporting violations against the `password` field.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            ))
            .with_field("password"));
        }

        if self.require_strong {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(AppError::validation(
                    "Password is too weak. Please use a stronger password with more entropy.",
                )
                .with_field("password"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booster_core::error::ErrorKind;

    fn config(min: usize, strong: bool) -> AuthConfig {
        AuthConfig {
            password_min_length: min,
            require_strong_passwords: strong,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_too_short() {
        let err = PasswordValidator::new(&config(8, false))
            .validate("short")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.field.as_deref(), Some("password"));
    }

    #[test]
    fn test_length_counts_characters() {
        let validator = PasswordValidator::new(&config(4, false));
        assert!(validator.validate("éééé").is_ok());
        assert!(validator.validate("ééé").is_err());
    }

    #[test]
    fn test_strength_check_only_when_enabled() {
        assert!(PasswordValidator::new(&config(8, false)).validate("password").is_ok());
        assert!(PasswordValidator::new(&config(8, true)).validate("password").is_err());
        assert!(
            PasswordValidator::new(&config(8, true))
                .validate("vX9#qLm2!tRw7@zP")
                .is_ok()
        );
    }
}
