//! Provider-side job posting document.
//!
//! The shape mirrors what a job-search provider returns for one posting.
//! Every field the matcher consumes is optional and defaults to empty:
//! a posting with missing fields scores neutrally, it never fails.

use serde::{Deserialize, Serialize};

/// One highlight section of a posting (e.g. "Qualifications", "Benefits").
///
/// Only the section titled "Qualifications" feeds the matcher; the title
/// comparison is exact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobHighlight {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Structured extras the provider detects on a posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectedExtensions {
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub health_insurance: Option<bool>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub schedule_type: Option<String>,
}

/// One way to apply to a posting. The matcher surfaces the first link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyOption {
    #[serde(default)]
    pub link: Option<String>,
}

/// A single job posting as returned by the search provider.
///
/// Never mutated by the matcher. Unknown provider fields are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    /// Provider-assigned identifier, used for deduplication at ingestion.
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Free-form, e.g. "Austin, TX" or "Anywhere".
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub job_highlights: Vec<JobHighlight>,
    #[serde(default)]
    pub detected_extensions: DetectedExtensions,
    #[serde(default)]
    pub apply_options: Vec<ApplyOption>,
}

impl JobPosting {
    /// Items of the highlight section titled "Qualifications".
    pub fn qualification_items(&self) -> impl Iterator<Item = &str> {
        self.job_highlights
            .iter()
            .filter(|h| h.title == "Qualifications")
            .flat_map(|h| h.items.iter().map(String::as_str))
    }

    /// First apply link, if any.
    pub fn apply_link(&self) -> Option<&str> {
        self.apply_options.iter().find_map(|o| o.link.as_deref())
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_deserializes_with_defaults() {
        let job: JobPosting = serde_json::from_str("{}").unwrap();
        assert!(job.job_id.is_none());
        assert!(job.job_highlights.is_empty());
        assert!(job.detected_extensions.salary.is_none());
        assert!(job.apply_link().is_none());
        assert_eq!(job.description_or_empty(), "");
    }

    #[test]
    fn test_unknown_provider_fields_are_ignored() {
        let json = r#"{
            "title": "Backend Engineer",
            "via": "LinkedIn",
            "thumbnail": "https://example.com/x.png",
            "detected_extensions": {"salary": "120k", "paid_time_off": true}
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(job.detected_extensions.salary.as_deref(), Some("120k"));
    }

    #[test]
    fn test_qualification_items_skip_other_sections() {
        let job: JobPosting = serde_json::from_str(
            r#"{
                "job_highlights": [
                    {"title": "Benefits", "items": ["401k", "PTO"]},
                    {"title": "Qualifications", "items": ["5+ years Python", "AWS"]},
                    {"title": "Responsibilities", "items": ["Ship features"]}
                ]
            }"#,
        )
        .unwrap();

        let items: Vec<&str> = job.qualification_items().collect();
        assert_eq!(items, vec!["5+ years Python", "AWS"]);
    }

    #[test]
    fn test_apply_link_takes_first_with_link() {
        let job: JobPosting = serde_json::from_str(
            r#"{"apply_options": [{}, {"link": "https://jobs.example.com/1"}]}"#,
        )
        .unwrap();
        assert_eq!(job.apply_link(), Some("https://jobs.example.com/1"));
    }
}
