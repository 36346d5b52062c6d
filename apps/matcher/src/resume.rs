//! Candidate-profile source: derive a profile from resume text.
//!
//! The resume body is treated like one large qualifications section: the
//! same vocabulary extractor surfaces skills, and the same years
//! patterns estimate experience. Location and target title are not
//! guessed from prose; callers supply them.

use std::path::Path;

use tracing::warn;

use crate::errors::AppError;
use crate::matching::experience::scan_years_span;
use crate::matching::skills::SkillExtractor;
use crate::models::CandidateProfile;

/// Extracts the text of a resume PDF.
pub fn extract_resume_text(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path).map_err(|e| AppError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        warn!(path = %path.display(), "resume PDF yielded no text");
    }
    Ok(text)
}

/// Builds a profile from resume text.
///
/// Experience takes the largest years figure mentioned anywhere in the
/// text ("3-5 years" reads as 5), defaulting to 0 when none is found.
pub fn profile_from_resume_text(text: &str, extractor: &SkillExtractor) -> CandidateProfile {
    let skills: Vec<String> = extractor.extract_from_text(text).into_iter().collect();
    let (_, max_years) = scan_years_span(text);

    CandidateProfile {
        skills,
        experience_years: max_years.unwrap_or(0),
        location: None,
        job_title: None,
    }
}
