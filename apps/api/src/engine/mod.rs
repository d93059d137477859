//! Recommendation Engine — scores every catalog entry against one student
//! profile and returns them ranked.
//!
//! Pure and synchronous: no I/O, no shared state, inputs are only borrowed.
//! Safe to call concurrently against the same catalog.

pub mod roi;
pub mod scoring;
pub mod summary;
pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::student::StudentProfile;
use crate::models::university::University;

use self::scoring::ScoreBreakdown;

const ELIGIBLE_THRESHOLD: u32 = 70;
const BORDERLINE_THRESHOLD: u32 = 45;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("ROI undefined for university '{university_id}': two-year cost is zero")]
    ZeroCostBasis { university_id: String },
}

impl EngineError {
    fn for_university(self, university_id: &str) -> Self {
        match self {
            EngineError::InvalidInput { field, reason } => EngineError::InvalidInput {
                field: format!("{university_id}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Eligibility {
    Eligible,
    Borderline,
    NotEligible,
}

impl Eligibility {
    /// Bands are closed at their lower edge: 70 is eligible, 45 is borderline.
    pub fn from_score(score: u32) -> Self {
        if score >= ELIGIBLE_THRESHOLD {
            Eligibility::Eligible
        } else if score >= BORDERLINE_THRESHOLD {
            Eligibility::Borderline
        } else {
            Eligibility::NotEligible
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "eligible",
            Eligibility::Borderline => "borderline",
            Eligibility::NotEligible => "not-eligible",
        }
    }
}

/// One scored catalog entry. Borrows the university from the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub university: &'a University,
    pub score: u32,
    pub eligibility: Eligibility,
    /// `None` when the ROI is undefined (zero cost basis).
    pub roi_score: Option<i64>,
    pub breakdown: ScoreBreakdown,
}

/// Scores a single university.
pub fn recommend<'a>(student: &StudentProfile, university: &'a University) -> Recommendation<'a> {
    let breakdown = scoring::score_breakdown(student, university);
    let score = breakdown.score();

    let roi_score = match roi::roi_score(university) {
        Ok(roi) => Some(roi),
        Err(e) => {
            debug!("{e}");
            None
        }
    };

    Recommendation {
        university,
        score,
        eligibility: Eligibility::from_score(score),
        roi_score,
        breakdown,
    }
}

/// Scores every university and returns them sorted by score, highest first.
///
/// The sort is stable: equal scores keep their catalog order. An empty catalog
/// yields an empty list.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the profile or any university
/// carries a non-finite number. Nothing is scored in that case.
pub fn generate_recommendations<'a>(
    student: &StudentProfile,
    universities: &'a [University],
) -> Result<Vec<Recommendation<'a>>, EngineError> {
    validation::validate_profile(student)?;
    for university in universities {
        validation::validate_university(university)?;
    }

    let mut recommendations: Vec<Recommendation<'a>> = universities
        .iter()
        .map(|university| recommend(student, university))
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        "Scored {} universities (top score: {:?})",
        recommendations.len(),
        recommendations.first().map(|r| r.score)
    );

    Ok(recommendations)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::student::StudentProfile;
    use crate::models::university::{CampusLife, University};

    pub fn make_student() -> StudentProfile {
        StudentProfile {
            gpa: 3.5,
            degree: "B.Tech".to_string(),
            branch: "Computer Science".to_string(),
            ielts: None,
            toefl: None,
            gre: None,
            preferred_countries: vec![],
            budget_min: 10_000,
            budget_max: 50_000,
            career_goal: "Software Engineering".to_string(),
            work_experience: None,
            research_papers: None,
            intake: "Fall 2026".to_string(),
            interested_in_pr: false,
        }
    }

    pub fn make_university(id: &str, country: &str) -> University {
        University {
            id: id.to_string(),
            name: format!("University {id}"),
            country: country.to_string(),
            city: "Somewhere".to_string(),
            ranking: 100,
            tuition_per_year: 20_000.0,
            living_cost_per_month: 1_000.0,
            avg_salary_after_grad: 60_000.0,
            min_gpa: Some(3.0),
            min_ielts: None,
            min_toefl: None,
            min_gre: None,
            programs: vec!["Computer Science".to_string()],
            pr_friendly: false,
            campus_life: CampusLife {
                housing: "Shared apartments".to_string(),
                grocery_nearby: true,
                avg_rent: 700.0,
                safety_rating: 4,
                transit_access: "Bus".to_string(),
            },
        }
    }
}
