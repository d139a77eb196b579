// src/profile/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;

// ============================================================================
// Profile Validators
// ============================================================================

pub struct ProfileValidator;

impl Validator<UpsertProfileRequest> for ProfileValidator {
    fn validate(&self, data: &UpsertProfileRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.status {
            Some(status) if !status.trim().is_empty() => {}
            _ => result.add_error("status", "Status is required"),
        }

        match &data.skills {
            Some(skills) if !skills.trim().is_empty() => {}
            _ => result.add_error("skills", "Skills is required"),
        }

        if let Some(bio) = &data.bio {
            if bio.len() > 2000 {
                result.add_error("bio", "Bio must be less than 2000 characters");
            }
        }

        result
    }
}

pub struct ExperienceValidator;

impl Validator<CreateExperienceRequest> for ExperienceValidator {
    fn validate(&self, data: &CreateExperienceRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.title {
            Some(title) if !title.trim().is_empty() => {}
            _ => result.add_error("title", "Title is required"),
        }

        match &data.company {
            Some(company) if !company.trim().is_empty() => {}
            _ => result.add_error("company", "Company is required"),
        }

        validate_date_fields(&mut result, data.from_date.as_deref(), data.to_date.as_deref());

        if let Some(description) = &data.description {
            if description.len() > 2000 {
                result.add_error(
                    "description",
                    "Description must be less than 2000 characters",
                );
            }
        }

        result
    }
}

pub struct EducationValidator;

impl Validator<CreateEducationRequest> for EducationValidator {
    fn validate(&self, data: &CreateEducationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.school {
            Some(school) if !school.trim().is_empty() => {}
            _ => result.add_error("school", "School is required"),
        }

        match &data.degree {
            Some(degree) if !degree.trim().is_empty() => {}
            _ => result.add_error("degree", "Degree is required"),
        }

        match &data.field_of_study {
            Some(field) if !field.trim().is_empty() => {}
            _ => result.add_error("fieldofstudy", "Field of study is required"),
        }

        validate_date_fields(&mut result, data.from_date.as_deref(), data.to_date.as_deref());

        if let Some(description) = &data.description {
            if description.len() > 2000 {
                result.add_error(
                    "description",
                    "Description must be less than 2000 characters",
                );
            }
        }

        result
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shared from/to checks for the nested-list requests. `from` is required and
/// both dates must be YYYY-MM-DD; `to` may not precede `from`.
fn validate_date_fields(result: &mut ValidationResult, from: Option<&str>, to: Option<&str>) {
    let parsed_from = match from {
        Some(from) if !from.trim().is_empty() => match parse_date(from) {
            Ok(d) => Some(d),
            Err(_) => {
                result.add_error("from", "From date must be in YYYY-MM-DD format");
                None
            }
        },
        _ => {
            result.add_error("from", "From date is required");
            None
        }
    };

    if let Some(to) = to {
        match parse_date(to) {
            Ok(parsed_to) => {
                if let Some(parsed_from) = parsed_from {
                    if parsed_to < parsed_from {
                        result.add_error("to", "To date must be after from date");
                    }
                }
            }
            Err(_) => result.add_error("to", "To date must be in YYYY-MM-DD format"),
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
}
