//! Ingestion-boundary glue: loading, deduplicating, and capping a batch
//! of provider postings, plus search-query fan-out.
//!
//! Deduplication lives here rather than in the matcher: the provider id
//! is an ingestion concern, and the same posting routinely comes back
//! from several search queries.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::JobPosting;

/// Number of candidate skills appended to the base query.
const QUERY_SKILL_COUNT: usize = 3;

#[derive(Debug, Deserialize)]
struct ProviderEnvelope {
    #[serde(default)]
    jobs_results: Vec<JobPosting>,
}

/// Reads a provider response file and returns its postings.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, AppError> {
    let raw = fs::read_to_string(path)?;
    parse_provider_response(&raw)
}

/// Accepts either a bare JSON array of postings or a provider envelope
/// carrying a `jobs_results` key.
pub fn parse_provider_response(raw: &str) -> Result<Vec<JobPosting>, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        let envelope: ProviderEnvelope = serde_json::from_value(value)?;
        Ok(envelope.jobs_results)
    }
}

/// Drops postings whose `job_id` was already seen, keeping the first
/// occurrence. Postings without an id have nothing to collide on and are
/// kept as-is.
pub fn dedup_jobs(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(jobs.len());

    for job in jobs {
        match &job.job_id {
            Some(id) if !seen.insert(id.clone()) => {
                debug!(job_id = %id, "dropping duplicate posting");
            }
            _ => kept.push(job),
        }
    }

    kept
}

/// Truncates the batch to `limit` postings, if a limit is set.
pub fn cap_jobs(mut jobs: Vec<JobPosting>, limit: Option<usize>) -> Vec<JobPosting> {
    if let Some(limit) = limit {
        jobs.truncate(limit);
    }
    jobs
}

/// Search-query variants for one candidate: the target title alone, then
/// the title paired with each of the first few listed skills.
pub fn generate_search_queries(job_title: &str, skills: &[String]) -> Vec<String> {
    let mut queries = vec![job_title.to_string()];
    for skill in skills.iter().take(QUERY_SKILL_COUNT) {
        queries.push(format!("{job_title} {skill}"));
    }
    queries
}
