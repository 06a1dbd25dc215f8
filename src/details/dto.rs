use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::details::repo::UserDetails;
use crate::error::FieldError;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Request body for the protected contact-details write.
#[derive(Debug, Deserialize)]
pub struct DetailsRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
}

impl DetailsRequest {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.phone.trim().is_empty() {
            errors.push(FieldError {
                field: "phone",
                message: "Phone is required",
            });
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError {
                field: "address",
                message: "Address is required",
            });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Invalid email format",
            });
        }
        errors
    }
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub message: &'static str,
    pub details: UserDetails,
}
