//! Input-shape checks run before scoring.
//!
//! Only well-formedness is checked: every numeric field must be finite so a
//! `NaN` never turns into a plausible-looking score. Domain ranges (negative
//! GPA, inverted budgets) are accepted and scored as-is.

use crate::engine::EngineError;
use crate::models::student::StudentProfile;
use crate::models::university::University;

pub fn validate_profile(profile: &StudentProfile) -> Result<(), EngineError> {
    require_finite("gpa", profile.gpa)?;
    if let Some(ielts) = profile.ielts {
        require_finite("ielts", ielts)?;
    }
    Ok(())
}

pub fn validate_university(university: &University) -> Result<(), EngineError> {
    if university.id.trim().is_empty() {
        return Err(EngineError::InvalidInput {
            field: "id".to_string(),
            reason: format!("university '{}' has an empty id", university.name),
        });
    }

    let fields = [
        ("tuitionPerYear", Some(university.tuition_per_year)),
        ("livingCostPerMonth", Some(university.living_cost_per_month)),
        ("avgSalaryAfterGrad", Some(university.avg_salary_after_grad)),
        ("minGPA", university.min_gpa),
        ("minIELTS", university.min_ielts),
    ];

    for (field, value) in fields {
        if let Some(value) = value {
            require_finite(field, value).map_err(|e| e.for_university(&university.id))?;
        }
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field: field.to_string(),
            reason: format!("expected a finite number, got {value}"),
        })
    }
}
