//! Weighted compatibility scoring of one posting against one candidate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::experience::{
    extract_experience_requirement, ExperienceRequirement, SeniorityLevel,
};
use crate::matching::skills::SkillExtractor;
use crate::models::{CandidateProfile, JobPosting};

/// Sub-score weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub education: f64,
    pub additional: f64,
}

pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: 0.40,
    experience: 0.25,
    location: 0.10,
    education: 0.10,
    additional: 0.15,
};

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.education + self.additional
    }
}

/// The five named sub-scores, each in 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub education_match: f64,
    pub additional_factors: f64,
}

/// Full scoring result for one (posting, candidate) pair.
///
/// Skill lists are sorted lexicographically so identical inputs always
/// serialize identically. `matching_skills` and `missing_skills` always
/// partition `required_skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted total, 0..=100, rounded to two decimals.
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub experience_requirement: ExperienceRequirement,
}

/// The scoring engine: a skill extractor plus a weights table, built once
/// and reused across a batch. Stateless between calls.
pub struct CompatibilityScorer {
    extractor: SkillExtractor,
    weights: ScoreWeights,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self::with_parts(SkillExtractor::new(), DEFAULT_WEIGHTS)
    }

    pub fn with_parts(extractor: SkillExtractor, weights: ScoreWeights) -> Self {
        Self { extractor, weights }
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    /// Scores one posting against one candidate.
    pub fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> CompatibilityResult {
        let required = self.extractor.extract(job);
        let experience_requirement = extract_experience_requirement(job);
        let candidate_skills = candidate.skill_set();

        let (skill_score, matching): (f64, BTreeSet<String>) = if required.is_empty() {
            // Nothing extractable: neutral, neither reward nor penalty.
            (50.0, BTreeSet::new())
        } else {
            let matching: BTreeSet<String> = candidate_skills
                .intersection(&required)
                .cloned()
                .collect();
            let ratio = matching.len() as f64 / required.len() as f64;
            ((ratio * 100.0).min(100.0), matching)
        };

        let experience_score =
            score_experience(&experience_requirement, candidate.experience_years);
        let location_score = score_location(job, candidate.location.as_deref());
        let education_score = score_education(job);
        let additional_score = score_additional_factors(job);

        let w = &self.weights;
        let total = skill_score * w.skills
            + experience_score * w.experience
            + location_score * w.location
            + education_score * w.education
            + additional_score * w.additional;

        let missing_skills: Vec<String> = required
            .difference(&candidate_skills)
            .cloned()
            .collect();

        CompatibilityResult {
            total_score: round2(total),
            breakdown: ScoreBreakdown {
                skill_match: round2(skill_score),
                experience_match: round2(experience_score),
                location_match: round2(location_score),
                education_match: round2(education_score),
                additional_factors: round2(additional_score),
            },
            matching_skills: matching.into_iter().collect(),
            missing_skills,
            required_skills: required.into_iter().collect(),
            experience_requirement,
        }
    }
}

/// Years-based when the posting states a minimum, tier-based otherwise.
fn score_experience(requirement: &ExperienceRequirement, candidate_years: u32) -> f64 {
    match requirement.min_years {
        Some(required) => {
            if candidate_years >= required {
                // Overqualification decays but never drops below 60.
                match candidate_years - required {
                    0..=2 => 100.0,
                    3..=5 => 80.0,
                    _ => 60.0,
                }
            } else {
                match required - candidate_years {
                    1 => 70.0,
                    2 => 50.0,
                    _ => 30.0,
                }
            }
        }
        None => score_experience_by_level(
            requirement.level,
            SeniorityLevel::from_years(candidate_years),
        ),
    }
}

fn score_experience_by_level(job_level: SeniorityLevel, candidate_level: SeniorityLevel) -> f64 {
    use SeniorityLevel::{Junior, Mid, Senior};
    match (job_level, candidate_level) {
        (Junior, Junior) | (Mid, Mid) | (Senior, Senior) => 100.0,
        (Junior, Mid) | (Junior, Senior) => 85.0,
        (Mid, Senior) => 80.0,
        (Mid, Junior) => 65.0,
        (Senior, Mid) => 55.0,
        (Senior, Junior) => 35.0,
    }
}

/// Neutral when either side is silent; remote postings match anywhere.
fn score_location(job: &JobPosting, candidate_location: Option<&str>) -> f64 {
    let candidate = match candidate_location.filter(|l| !l.is_empty()) {
        Some(l) => l.to_lowercase(),
        None => return 50.0,
    };
    let job_location = match job.location.as_deref().filter(|l| !l.is_empty()) {
        Some(l) => l.to_lowercase(),
        None => return 50.0,
    };

    if job_location.contains(&candidate) || candidate.contains(&job_location) {
        return 100.0;
    }
    if candidate
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .any(|token| job_location.contains(token))
    {
        return 70.0;
    }
    if job_location.contains("remote")
        || job.description_or_empty().to_lowercase().contains("remote")
    {
        return 100.0;
    }

    50.0
}

/// Placeholder axis: candidate education data is not consumed yet, so
/// both branches grant full credit. The degree-detection split stays so a
/// real comparison can slot in without reshaping the breakdown.
fn score_education(job: &JobPosting) -> f64 {
    let description = job.description_or_empty().to_lowercase();
    if description.contains("bachelor") || description.contains("degree") {
        100.0
    } else {
        100.0
    }
}

/// Base 50, plus bonuses for disclosed salary and health insurance.
fn score_additional_factors(job: &JobPosting) -> f64 {
    let extensions = &job.detected_extensions;
    let mut score: f64 = 50.0;
    if extensions.salary.as_deref().is_some_and(|s| !s.is_empty()) {
        score += 10.0;
    }
    if extensions.health_insurance.unwrap_or(false) {
        score += 5.0;
    }
    score.min(100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetectedExtensions;

    fn job_with_description(description: &str) -> JobPosting {
        JobPosting {
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    fn candidate(skills: &[&str], years: u32, location: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            location: location.map(|l| l.to_string()),
            job_title: None,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_scenario_scores_87_5() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description(
            "5+ years of Python and AWS experience, Bachelor's degree required",
        );
        let result = scorer.score(&job, &candidate(&["python", "aws"], 6, None));

        assert_eq!(result.breakdown.skill_match, 100.0);
        assert_eq!(result.breakdown.experience_match, 100.0);
        assert_eq!(result.breakdown.location_match, 50.0);
        assert_eq!(result.breakdown.education_match, 100.0);
        assert_eq!(result.breakdown.additional_factors, 50.0);
        assert_eq!(result.total_score, 87.5);
    }

    #[test]
    fn test_no_extractable_skills_is_neutral() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description("Work with our proprietary in-house platform.");
        let result = scorer.score(&job, &candidate(&["python", "aws"], 5, None));

        assert!(result.required_skills.is_empty());
        assert_eq!(result.breakdown.skill_match, 50.0);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_matching_and_missing_partition_required() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description("We use Python, Docker and PostgreSQL daily.");
        let result = scorer.score(&job, &candidate(&["Python", "terraform"], 3, None));

        let mut reunion = result.matching_skills.clone();
        reunion.extend(result.missing_skills.clone());
        reunion.sort();
        assert_eq!(reunion, result.required_skills);
        assert!(result
            .matching_skills
            .iter()
            .all(|s| !result.missing_skills.contains(s)));
        assert_eq!(result.matching_skills, vec!["python"]);
    }

    #[test]
    fn test_skill_lists_are_sorted() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description("Stack: redis, aws, python, docker, mysql.");
        let result = scorer.score(&job, &candidate(&[], 3, None));

        let mut sorted = result.required_skills.clone();
        sorted.sort();
        assert_eq!(result.required_skills, sorted);
    }

    #[test]
    fn test_experience_years_bands() {
        let req = ExperienceRequirement {
            min_years: Some(5),
            max_years: Some(5),
            level: SeniorityLevel::Senior,
        };
        // Meets or exceeds.
        assert_eq!(score_experience(&req, 5), 100.0);
        assert_eq!(score_experience(&req, 7), 100.0);
        assert_eq!(score_experience(&req, 8), 80.0);
        assert_eq!(score_experience(&req, 10), 80.0);
        assert_eq!(score_experience(&req, 11), 60.0);
        // Short.
        assert_eq!(score_experience(&req, 4), 70.0);
        assert_eq!(score_experience(&req, 3), 50.0);
        assert_eq!(score_experience(&req, 2), 30.0);
        assert_eq!(score_experience(&req, 0), 30.0);
    }

    #[test]
    fn test_experience_level_cross_table() {
        use SeniorityLevel::{Junior, Mid, Senior};
        assert_eq!(score_experience_by_level(Junior, Junior), 100.0);
        assert_eq!(score_experience_by_level(Junior, Mid), 85.0);
        assert_eq!(score_experience_by_level(Junior, Senior), 85.0);
        assert_eq!(score_experience_by_level(Mid, Senior), 80.0);
        assert_eq!(score_experience_by_level(Mid, Junior), 65.0);
        assert_eq!(score_experience_by_level(Senior, Mid), 55.0);
        assert_eq!(score_experience_by_level(Senior, Junior), 35.0);
    }

    #[test]
    fn test_senior_job_junior_candidate_scores_35() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description("Senior engineer wanted to own our platform.");
        let result = scorer.score(&job, &candidate(&[], 1, None));
        assert_eq!(result.breakdown.experience_match, 35.0);
    }

    #[test]
    fn test_location_neutral_when_either_side_missing() {
        let mut job = job_with_description("Great role.");
        assert_eq!(score_location(&job, None), 50.0);

        job.location = Some("Austin, TX".to_string());
        assert_eq!(score_location(&job, None), 50.0);

        job.location = None;
        assert_eq!(score_location(&job, Some("Austin, TX")), 50.0);
    }

    #[test]
    fn test_location_substring_match_either_direction() {
        let mut job = job_with_description("Great role.");
        job.location = Some("Austin, TX, United States".to_string());
        assert_eq!(score_location(&job, Some("Austin, TX")), 100.0);

        job.location = Some("Austin".to_string());
        assert_eq!(score_location(&job, Some("Downtown Austin Area")), 100.0);
    }

    #[test]
    fn test_location_city_token_match() {
        let mut job = job_with_description("Great role.");
        job.location = Some("Greater Austin Area".to_string());
        assert_eq!(score_location(&job, Some("Austin, TX")), 70.0);
    }

    #[test]
    fn test_remote_matches_any_location() {
        let mut job = job_with_description("Great role.");
        job.location = Some("Remote".to_string());
        assert_eq!(score_location(&job, Some("Austin, TX")), 100.0);

        job.location = Some("New York, NY".to_string());
        job.description = Some("This position is fully remote.".to_string());
        assert_eq!(score_location(&job, Some("Austin, TX")), 100.0);
    }

    #[test]
    fn test_education_is_constant_full_credit() {
        assert_eq!(score_education(&job_with_description("Bachelor's degree required")), 100.0);
        assert_eq!(score_education(&job_with_description("No formal requirements")), 100.0);
    }

    #[test]
    fn test_additional_factors_bonuses() {
        let mut job = JobPosting::default();
        assert_eq!(score_additional_factors(&job), 50.0);

        job.detected_extensions = DetectedExtensions {
            salary: Some("90k-120k".to_string()),
            health_insurance: Some(true),
            ..Default::default()
        };
        assert_eq!(score_additional_factors(&job), 65.0);

        job.detected_extensions.salary = Some(String::new());
        assert_eq!(score_additional_factors(&job), 55.0);
    }

    #[test]
    fn test_total_is_rounded_to_two_decimals() {
        let scorer = CompatibilityScorer::new();
        let job = job_with_description("We use python, docker and aws.");
        let result = scorer.score(&job, &candidate(&["python"], 3, None));

        assert_eq!(result.total_score, round2(result.total_score));
        assert!((0.0..=100.0).contains(&result.total_score));
    }
}
