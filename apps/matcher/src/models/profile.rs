//! Candidate profile supplied by the caller (typically a parsed resume).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The candidate side of a match.
///
/// Treated as already-validated input: the matcher normalizes skill
/// casing but performs no further schema checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    /// Free-form, e.g. "San Francisco, CA".
    #[serde(default)]
    pub location: Option<String>,
    /// Target role, used to seed search-query generation.
    #[serde(default)]
    pub job_title: Option<String>,
}

impl CandidateProfile {
    /// Lower-cased, trimmed, deduplicated skill set.
    ///
    /// Skills compare case-insensitively everywhere; this is the canonical
    /// form the scorer intersects with extracted job skills.
    pub fn skill_set(&self) -> BTreeSet<String> {
        self.skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
