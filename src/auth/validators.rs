// src/auth/validators.rs

use super::models::{LoginRequest, RegisterRequest};
use crate::common::{ValidationResult, Validator};

fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    parts.len() == 2 && !parts[0].is_empty() && parts[1].contains('.') && !parts[1].starts_with('.')
}

pub struct RegisterValidator;

impl Validator<RegisterRequest> for RegisterValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => result.add_error("name", "Name is required"),
        }

        match &data.email {
            Some(email) if is_valid_email(email.trim()) => {}
            _ => result.add_error("email", "Please include a valid email"),
        }

        match &data.password {
            Some(password) if password.len() >= 6 => {}
            _ => result.add_error(
                "password",
                "Please enter a password with 6 or more characters",
            ),
        }

        result
    }
}

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.email {
            Some(email) if is_valid_email(email.trim()) => {}
            _ => result.add_error("email", "Please include a valid email"),
        }

        match &data.password {
            Some(password) if !password.is_empty() => {}
            _ => result.add_error("password", "Password is required"),
        }

        result
    }
}
