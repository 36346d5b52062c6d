//! Human-readable explanation lines for one scored posting.

use crate::matching::experience::SeniorityLevel;
use crate::matching::scoring::CompatibilityResult;
use crate::models::JobPosting;

const MAX_NAMED_MATCHING: usize = 5;
const MAX_NAMED_MISSING: usize = 3;

/// Builds the explanation lines for one match, in fixed order: overall
/// tier, skill coverage, missing skills, experience fit, location fit.
/// Fully deterministic for identical inputs.
pub fn generate_match_explanation(
    job: &JobPosting,
    result: &CompatibilityResult,
    candidate_years: u32,
) -> Vec<String> {
    let mut lines = Vec::new();

    let score = result.total_score;
    let tier = if score >= 80.0 {
        "Strong match"
    } else if score >= 60.0 {
        "Good match"
    } else if score >= 40.0 {
        "Moderate match"
    } else {
        "Weak match"
    };
    lines.push(format!("{tier} ({score}% compatibility)"));

    let matching = &result.matching_skills;
    let missing = &result.missing_skills;
    let total_required = if result.required_skills.is_empty() {
        matching.len() + missing.len()
    } else {
        result.required_skills.len()
    };
    if total_required > 0 {
        let named = if matching.is_empty() {
            "none".to_string()
        } else {
            matching[..matching.len().min(MAX_NAMED_MATCHING)].join(", ")
        };
        lines.push(format!(
            "Skills match: You have {}/{} required skills ({named})",
            matching.len(),
            total_required
        ));
    }
    if !missing.is_empty() {
        let named = missing[..missing.len().min(MAX_NAMED_MISSING)].join(", ");
        lines.push(format!(
            "Missing skills: {named} (mentioned in job requirements)"
        ));
    }

    let requirement = &result.experience_requirement;
    let experience_match = result.breakdown.experience_match;
    if let Some(min_years) = requirement.min_years {
        lines.push(format!(
            "Experience level: Job requires {min_years}+ years ({} level) - {experience_match}% match",
            requirement.level
        ));
    } else {
        let candidate_level = SeniorityLevel::from_years(candidate_years);
        lines.push(format!(
            "Experience level: Job requires {} level (you have {candidate_level} level based on {candidate_years} years) - {experience_match}% match",
            requirement.level
        ));
    }

    if result.breakdown.location_match >= 70.0 {
        lines.push(format!(
            "Location: {} - Good match",
            job.location.as_deref().unwrap_or("N/A")
        ));
    }

    lines
}
