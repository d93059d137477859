//! Dashboard aggregates over a ranked recommendation list.

use serde::Serialize;

use crate::engine::{roi, Eligibility, Recommendation};

/// Number of top recommendations included in the cost comparison.
pub const COMPARISON_SIZE: usize = 5;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCounts {
    pub eligible: usize,
    pub borderline: usize,
    pub not_eligible: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    pub university_id: String,
    pub name: String,
    pub two_year_cost: f64,
    pub expected_salary: f64,
    pub expected_earnings: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub university_id: String,
    pub tuition: f64,
    pub living: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub eligibility_counts: EligibilityCounts,
    pub cost_comparison: Vec<CostComparison>,
    pub top_pick_cost_breakdown: Option<CostBreakdown>,
}

pub fn count_by_eligibility(recommendations: &[Recommendation<'_>]) -> EligibilityCounts {
    recommendations
        .iter()
        .fold(EligibilityCounts::default(), |mut counts, rec| {
            match rec.eligibility {
                Eligibility::Eligible => counts.eligible += 1,
                Eligibility::Borderline => counts.borderline += 1,
                Eligibility::NotEligible => counts.not_eligible += 1,
            }
            counts
        })
}

/// Expects `recommendations` already ranked.
pub fn summarize(recommendations: &[Recommendation<'_>]) -> RecommendationSummary {
    let cost_comparison = recommendations
        .iter()
        .take(COMPARISON_SIZE)
        .map(|rec| CostComparison {
            university_id: rec.university.id.clone(),
            name: rec.university.name.clone(),
            two_year_cost: rec.university.two_year_cost(),
            expected_salary: rec.university.avg_salary_after_grad,
            expected_earnings: roi::expected_earnings(rec.university),
        })
        .collect();

    let top_pick_cost_breakdown = recommendations.first().map(|rec| CostBreakdown {
        university_id: rec.university.id.clone(),
        tuition: rec.university.two_year_tuition(),
        living: rec.university.two_year_living(),
    });

    RecommendationSummary {
        eligibility_counts: count_by_eligibility(recommendations),
        cost_comparison,
        top_pick_cost_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_recommendations;
    use crate::engine::test_support::{make_student, make_university};
    use crate::models::university::University;

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.eligibility_counts, EligibilityCounts::default());
        assert!(summary.cost_comparison.is_empty());
        assert!(summary.top_pick_cost_breakdown.is_none());
    }

    #[test]
    fn test_counts_cover_every_band() {
        let mut student = make_student();
        student.preferred_countries = vec!["UK".to_string()];
        student.gpa = 3.5;

        // 35 + 25 + 25 + 15 = 100
        let eligible = make_university("eligible", "UK");
        // 35 + 0 + 0 + 15 = 50
        let mut borderline = make_university("borderline", "USA");
        borderline.tuition_per_year = 100_000.0;
        // 0 + 0 + 0 + 15 = 15
        let mut not_eligible = make_university("not-eligible", "USA");
        not_eligible.tuition_per_year = 100_000.0;
        not_eligible.min_gpa = Some(4.5);

        let catalog = vec![not_eligible, borderline, eligible];
        let recs = generate_recommendations(&student, &catalog).unwrap();
        let counts = count_by_eligibility(&recs);
        assert_eq!(
            counts,
            EligibilityCounts {
                eligible: 1,
                borderline: 1,
                not_eligible: 1,
            }
        );
    }

    #[test]
    fn test_comparison_takes_top_five_in_rank_order() {
        let catalog: Vec<University> = (0..8)
            .map(|i| make_university(&format!("u{i}"), "USA"))
            .collect();
        let recs = generate_recommendations(&make_student(), &catalog).unwrap();
        let summary = summarize(&recs);

        assert_eq!(summary.cost_comparison.len(), COMPARISON_SIZE);
        let ids: Vec<&str> = summary
            .cost_comparison
            .iter()
            .map(|c| c.university_id.as_str())
            .collect();
        assert_eq!(ids, vec!["u0", "u1", "u2", "u3", "u4"]);
        assert_eq!(summary.cost_comparison[0].two_year_cost, 64_000.0);
        assert_eq!(summary.cost_comparison[0].expected_earnings, 180_000.0);
    }

    #[test]
    fn test_top_pick_breakdown() {
        let catalog = vec![make_university("only", "USA")];
        let recs = generate_recommendations(&make_student(), &catalog).unwrap();
        let breakdown = summarize(&recs).top_pick_cost_breakdown.unwrap();
        assert_eq!(breakdown.university_id, "only");
        assert_eq!(breakdown.tuition, 40_000.0);
        assert_eq!(breakdown.living, 24_000.0);
    }
}
