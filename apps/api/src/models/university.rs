use serde::{Deserialize, Serialize};

/// Campus-life details shown alongside a recommendation. Not used for scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampusLife {
    pub housing: String,
    pub grocery_nearby: bool,
    pub avg_rent: f64,
    pub safety_rating: u8,
    pub transit_access: String,
}

/// A catalog entry. Read-only reference data; the engine only ever borrows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub ranking: u32,
    pub tuition_per_year: f64,
    pub living_cost_per_month: f64,
    pub avg_salary_after_grad: f64,
    #[serde(rename = "minGPA", default)]
    pub min_gpa: Option<f64>,
    #[serde(rename = "minIELTS", default)]
    pub min_ielts: Option<f64>,
    #[serde(rename = "minTOEFL", default)]
    pub min_toefl: Option<u16>,
    #[serde(rename = "minGRE", default)]
    pub min_gre: Option<u16>,
    #[serde(default)]
    pub programs: Vec<String>,
    pub pr_friendly: bool,
    pub campus_life: CampusLife,
}

impl University {
    /// Tuition plus twelve months of living costs.
    pub fn annual_cost(&self) -> f64 {
        self.tuition_per_year + self.living_cost_per_month * 12.0
    }

    pub fn two_year_tuition(&self) -> f64 {
        self.tuition_per_year * 2.0
    }

    pub fn two_year_living(&self) -> f64 {
        self.living_cost_per_month * 24.0
    }

    /// Fixed two-year cost basis used for ROI.
    pub fn two_year_cost(&self) -> f64 {
        self.two_year_tuition() + self.two_year_living()
    }
}
