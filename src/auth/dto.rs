use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Request body for user registration. Missing JSON keys deserialize to
/// empty strings and fall out as "required" validation errors.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(FieldError {
                field: "username",
                message: "Username is required",
            });
        }
        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Password is required",
            });
        } else if self.password.len() < 6 {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 6 characters long",
            });
        }
        errors
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(FieldError {
                field: "username",
                message: "Username is required",
            });
        }
        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Password is required",
            });
        }
        errors
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_accepts_valid_input() {
        let req = RegisterRequest {
            username: "alice".into(),
            password: "secret1".into(),
        };
        assert!(req.validate().is_empty());
    }

    #[test]
    fn register_requires_both_fields() {
        let req = RegisterRequest {
            username: "".into(),
            password: "".into(),
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn register_rejects_short_password() {
        let req = RegisterRequest {
            username: "alice".into(),
            password: "12345".into(),
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let req = LoginRequest {
            username: "  ".into(),
            password: "".into(),
        };
        assert_eq!(req.validate().len(), 2);
    }
}
