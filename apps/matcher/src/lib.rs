//! Job-to-candidate compatibility engine.
//!
//! Given a batch of semi-structured job postings and a candidate profile,
//! computes a 0-100 compatibility score per posting with an explainable
//! five-way breakdown (skills, experience, location, education, extras),
//! and returns the batch ranked by score.
//!
//! The engine is pure and synchronous; the [`ingest`] and [`resume`]
//! modules plus the CLI binary provide the thin I/O around it.

pub mod config;
pub mod errors;
pub mod ingest;
pub mod matching;
pub mod models;
pub mod resume;

pub use errors::AppError;
pub use matching::{
    match_jobs_to_user, CompatibilityResult, CompatibilityScorer, ExperienceRequirement,
    MatchSummary, MatchedJob, ScoreBreakdown, SeniorityLevel, SkillExtractor,
};
pub use models::{CandidateProfile, JobPosting};
