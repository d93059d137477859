use serde::{Deserialize, Serialize};

/// Snapshot of one applicant's academic and financial situation.
///
/// Test scores are optional: `None` means "not provided" and is never treated
/// as a failed threshold. A score of `0` is a real score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub gpa: f64,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub ielts: Option<f64>,
    #[serde(default)]
    pub toefl: Option<u16>,
    #[serde(default)]
    pub gre: Option<u16>,
    #[serde(default)]
    pub preferred_countries: Vec<String>,
    pub budget_min: i64,
    pub budget_max: i64,
    #[serde(default)]
    pub career_goal: String,
    #[serde(default)]
    pub work_experience: Option<String>,
    #[serde(default)]
    pub research_papers: Option<String>,
    #[serde(default)]
    pub intake: String,
    #[serde(default)]
    pub interested_in_pr: bool,
}

impl StudentProfile {
    pub fn prefers_country(&self, country: &str) -> bool {
        self.preferred_countries.iter().any(|c| c == country)
    }
}
