//! The compatibility engine: skill extraction, experience parsing,
//! weighted scoring, explanations, and batch ranking.
//!
//! Everything here is synchronous and pure: each posting is scored
//! independently from its text and the candidate profile, with no shared
//! state between calls. Callers may parallelize a batch freely.

pub mod experience;
pub mod explanation;
pub mod rank;
pub mod scoring;
pub mod skills;
pub mod vocabulary;

pub use experience::{extract_experience_requirement, ExperienceRequirement, SeniorityLevel};
pub use explanation::generate_match_explanation;
pub use rank::{match_jobs_to_user, rank_jobs, MatchSummary, MatchedJob};
pub use scoring::{
    CompatibilityResult, CompatibilityScorer, ScoreBreakdown, ScoreWeights, DEFAULT_WEIGHTS,
};
pub use skills::SkillExtractor;
pub use vocabulary::SkillVocabulary;
