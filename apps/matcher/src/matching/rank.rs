//! Batch ranking: score every posting, attach explanations, sort.

use serde::{Deserialize, Serialize};

use crate::matching::experience::ExperienceRequirement;
use crate::matching::explanation::generate_match_explanation;
use crate::matching::scoring::{CompatibilityScorer, ScoreBreakdown};
use crate::models::{CandidateProfile, JobPosting};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Presentation-ready record for one ranked posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    pub job_id: Option<String>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub posted_at: Option<String>,
    pub salary: Option<String>,
    pub schedule_type: Option<String>,
    pub compatibility_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub match_explanations: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub experience_requirement: ExperienceRequirement,
    pub apply_link: Option<String>,
    pub description_preview: Option<String>,
}

/// Batch-level aggregate over the ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Mean compatibility score, two decimals, 0 for an empty batch.
    pub average_score: f64,
    /// Matches scoring 70 or above.
    pub high_match_count: usize,
    /// Matches scoring in 40..70.
    pub medium_match_count: usize,
    /// Matches scoring below 40.
    pub low_match_count: usize,
}

impl MatchSummary {
    pub fn from_matches(matches: &[MatchedJob]) -> Self {
        let average_score = if matches.is_empty() {
            0.0
        } else {
            let sum: f64 = matches.iter().map(|m| m.compatibility_score).sum();
            let mean = sum / matches.len() as f64;
            (mean * 100.0).round() / 100.0
        };
        Self {
            average_score,
            high_match_count: matches
                .iter()
                .filter(|m| m.compatibility_score >= 70.0)
                .count(),
            medium_match_count: matches
                .iter()
                .filter(|m| (40.0..70.0).contains(&m.compatibility_score))
                .count(),
            low_match_count: matches
                .iter()
                .filter(|m| m.compatibility_score < 40.0)
                .count(),
        }
    }
}

/// Scores and ranks a batch with a default-configured scorer.
pub fn match_jobs_to_user(jobs: &[JobPosting], candidate: &CandidateProfile) -> Vec<MatchedJob> {
    rank_jobs(&CompatibilityScorer::new(), jobs, candidate)
}

/// Scores every posting independently, then sorts by score descending.
///
/// The sort is stable: equal scores keep their input order, so the same
/// batch always produces the same ranking.
pub fn rank_jobs(
    scorer: &CompatibilityScorer,
    jobs: &[JobPosting],
    candidate: &CandidateProfile,
) -> Vec<MatchedJob> {
    let mut matched: Vec<MatchedJob> = jobs
        .iter()
        .map(|job| {
            let result = scorer.score(job, candidate);
            let explanations =
                generate_match_explanation(job, &result, candidate.experience_years);

            MatchedJob {
                job_id: job.job_id.clone(),
                title: job.title.clone(),
                company_name: job.company_name.clone(),
                location: job.location.clone(),
                posted_at: job.detected_extensions.posted_at.clone(),
                salary: job.detected_extensions.salary.clone(),
                schedule_type: job.detected_extensions.schedule_type.clone(),
                compatibility_score: result.total_score,
                score_breakdown: result.breakdown,
                match_explanations: explanations,
                matching_skills: result.matching_skills,
                missing_skills: result.missing_skills,
                required_skills: result.required_skills,
                experience_requirement: result.experience_requirement,
                apply_link: job.apply_link().map(str::to_string),
                description_preview: description_preview(job),
            }
        })
        .collect();

    matched.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
    matched
}

fn description_preview(job: &JobPosting) -> Option<String> {
    let description = job.description.as_deref().filter(|d| !d.is_empty())?;
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    Some(preview)
}
