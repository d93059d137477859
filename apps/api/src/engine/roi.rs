//! Return on investment over a fixed horizon: three years of graduate salary
//! against two years of tuition plus living costs. Independent of the fit score.

use crate::engine::EngineError;
use crate::models::university::University;

const EARNINGS_YEARS: f64 = 3.0;

/// Expected earnings over the fixed three-year horizon.
pub fn expected_earnings(university: &University) -> f64 {
    university.avg_salary_after_grad * EARNINGS_YEARS
}

/// ROI as a whole percentage, rounded half-up.
///
/// # Errors
///
/// Returns [`EngineError::ZeroCostBasis`] when the two-year cost is zero, since
/// the ratio is undefined.
pub fn roi_score(university: &University) -> Result<i64, EngineError> {
    let total_cost = university.two_year_cost();
    if total_cost == 0.0 {
        return Err(EngineError::ZeroCostBasis {
            university_id: university.id.clone(),
        });
    }

    let percent = (expected_earnings(university) - total_cost) / total_cost * 100.0;
    Ok(round_half_up(percent))
}

/// Rounds to the nearest integer; only exact halves go toward +∞.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
