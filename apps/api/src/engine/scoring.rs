//! Per-university fit scoring.
//!
//! Additive point budget, each component computed independently:
//!
//! | component   | points |
//! |-------------|--------|
//! | academic    | 0 – 35 |
//! | geographic  | 0 – 25 |
//! | financial   | 0 – 25 |
//! | tests       | 0 – 15 |
//! | residency   | 0 – 5  |
//!
//! The sum can reach 105, so the total is clamped to 100 as the final step.

use serde::Serialize;

use crate::models::student::StudentProfile;
use crate::models::university::University;

pub const MAX_SCORE: u32 = 100;

const ACADEMIC_FULL: u32 = 35;
const ACADEMIC_NEAR: u32 = 22;
const ACADEMIC_STRETCH: u32 = 10;
// Shortfall limits in hundredths of a GPA point.
const ACADEMIC_NEAR_GAP: i64 = 30;
const ACADEMIC_STRETCH_GAP: i64 = 60;

const GEOGRAPHIC_MATCH: u32 = 25;

const FINANCIAL_WITHIN: u32 = 25;
const FINANCIAL_SLIGHTLY_OVER: u32 = 15;
const FINANCIAL_OVER: u32 = 5;
const SLIGHTLY_OVER_FACTOR: f64 = 1.2;
const OVER_FACTOR: f64 = 1.5;

const TESTS_FULL: u32 = 15;
const TEST_PENALTY: u32 = 5;

const RESIDENCY_BONUS: u32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Points awarded per component, before clamping.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub academic: u32,
    pub geographic: u32,
    pub financial: u32,
    pub tests: u32,
    pub residency: u32,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> u32 {
        self.academic + self.geographic + self.financial + self.tests + self.residency
    }

    /// Final score in `0..=100`.
    pub fn score(&self) -> u32 {
        self.raw_total().min(MAX_SCORE)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn score_breakdown(student: &StudentProfile, university: &University) -> ScoreBreakdown {
    ScoreBreakdown {
        academic: academic_fit(student.gpa, university.min_gpa),
        geographic: geographic_fit(student, &university.country),
        financial: financial_fit(university.annual_cost(), student.budget_max),
        tests: test_fit(student, university),
        residency: residency_bonus(student.interested_in_pr, university.pr_friendly),
    }
}

/// Discrete step function; each band is inclusive at its lower edge.
/// No stated minimum counts as meeting it.
///
/// The shortfall is measured in whole hundredths so that `3.3` against a
/// minimum of `3.6` sits exactly on the 0.3 edge.
pub fn academic_fit(gpa: f64, min_gpa: Option<f64>) -> u32 {
    let Some(min_gpa) = min_gpa else {
        return ACADEMIC_FULL;
    };

    let gap = ((min_gpa - gpa) * 100.0).round() as i64;
    if gap <= 0 {
        ACADEMIC_FULL
    } else if gap <= ACADEMIC_NEAR_GAP {
        ACADEMIC_NEAR
    } else if gap <= ACADEMIC_STRETCH_GAP {
        ACADEMIC_STRETCH
    } else {
        0
    }
}

pub fn geographic_fit(student: &StudentProfile, country: &str) -> u32 {
    if student.prefers_country(country) {
        GEOGRAPHIC_MATCH
    } else {
        0
    }
}

/// Compares a yearly cost against `budget_max` only.
pub fn financial_fit(annual_cost: f64, budget_max: i64) -> u32 {
    let budget = budget_max as f64;

    if annual_cost <= budget {
        FINANCIAL_WITHIN
    } else if annual_cost <= budget * SLIGHTLY_OVER_FACTOR {
        FINANCIAL_SLIGHTLY_OVER
    } else if annual_cost <= budget * OVER_FACTOR {
        FINANCIAL_OVER
    } else {
        0
    }
}

/// Starts at 15 and loses 5 per failed test. A test only counts as failed when
/// the university states a minimum, the student provided a score, and the
/// score is below the minimum.
pub fn test_fit(student: &StudentProfile, university: &University) -> u32 {
    let failures = [
        falls_short(student.ielts, university.min_ielts),
        falls_short(student.toefl, university.min_toefl),
        falls_short(student.gre, university.min_gre),
    ]
    .into_iter()
    .filter(|failed| *failed)
    .count() as u32;

    TESTS_FULL.saturating_sub(failures * TEST_PENALTY)
}

fn falls_short<T: PartialOrd>(provided: Option<T>, minimum: Option<T>) -> bool {
    match (provided, minimum) {
        (Some(provided), Some(minimum)) => provided < minimum,
        _ => false,
    }
}

pub fn residency_bonus(interested_in_pr: bool, pr_friendly: bool) -> u32 {
    if interested_in_pr && pr_friendly {
        RESIDENCY_BONUS
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
