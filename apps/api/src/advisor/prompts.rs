// Prompt templates for the advisor. Cross-cutting fragments live in
// llm_client::prompts.

use crate::engine::Recommendation;
use crate::llm_client::prompts::{BULLET_FORMAT_INSTRUCTION, GROUNDING_INSTRUCTION};
use crate::models::student::StudentProfile;

/// Per-university insight. Replace every `{placeholder}` before sending.
pub const UNIVERSITY_INSIGHT_TEMPLATE: &str = "\
A student with this profile: {student_summary}
is considering {name} in {city}, {country} (Ranked #{ranking}).
Tuition: ${tuition}/yr. Match score: {score}/100 ({eligibility}). ROI over 3 years: {roi}.
In 3-4 concise bullet points, explain: 1) Why this is/isn't a good fit 2) Key strengths 3) Potential risks 4) One actionable tip.
{format_instruction}
{grounding_instruction}";

/// Whole-profile analysis. Replace `{profile_json}` before sending.
pub const PROFILE_ANALYSIS_TEMPLATE: &str = "\
Analyze this student profile and give a detailed recommendation on studying abroad:
{profile_json}
{format_instruction}
{grounding_instruction}";

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// One-line summary of the profile fields the advisor needs.
pub fn student_summary(profile: &StudentProfile) -> String {
    format!(
        "GPA: {}, Degree: {} ({}), Career: {}, Budget: ${}-${}/yr, IELTS: {}, TOEFL: {}, GRE: {}, PR interest: {}",
        profile.gpa,
        profile.degree,
        profile.branch,
        profile.career_goal,
        profile.budget_min,
        profile.budget_max,
        or_na(profile.ielts),
        or_na(profile.toefl),
        or_na(profile.gre),
        if profile.interested_in_pr { "Yes" } else { "No" },
    )
}

pub fn university_insight_prompt(student_summary: &str, rec: &Recommendation<'_>) -> String {
    let uni = rec.university;
    let roi = rec
        .roi_score
        .map_or_else(|| "undefined".to_string(), |roi| format!("{roi}%"));

    UNIVERSITY_INSIGHT_TEMPLATE
        .replace("{student_summary}", student_summary)
        .replace("{name}", &uni.name)
        .replace("{city}", &uni.city)
        .replace("{country}", &uni.country)
        .replace("{ranking}", &uni.ranking.to_string())
        .replace("{tuition}", &uni.tuition_per_year.to_string())
        .replace("{score}", &rec.score.to_string())
        .replace("{eligibility}", rec.eligibility.as_str())
        .replace("{roi}", &roi)
        .replace("{format_instruction}", BULLET_FORMAT_INSTRUCTION)
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
}

pub fn profile_analysis_prompt(profile: &StudentProfile) -> Result<String, serde_json::Error> {
    let profile_json = serde_json::to_string_pretty(profile)?;
    Ok(PROFILE_ANALYSIS_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{format_instruction}", BULLET_FORMAT_INSTRUCTION)
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION))
}
