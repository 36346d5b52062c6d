//! Skill extraction from job posting text.

use std::collections::BTreeSet;

use regex::RegexSet;
use regex::RegexSetBuilder;

use crate::matching::vocabulary::SkillVocabulary;
use crate::models::JobPosting;

/// Scans posting text for the fixed skill vocabulary.
///
/// The word-boundary patterns are compiled once at construction into a
/// single case-insensitive [`RegexSet`]; per-job work is one pass of the
/// set plus the substring pre-pass. Results are canonical lower-cased
/// terms in a sorted set.
pub struct SkillExtractor {
    boundary_terms: Vec<String>,
    boundary_set: RegexSet,
    substring_rules: Vec<(String, String)>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::with_vocabulary(SkillVocabulary::default())
    }

    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        let (boundary_terms, substring_rules) = vocabulary.partition();

        let patterns: Vec<String> = boundary_terms
            .iter()
            .map(|t| format!(r"\b{}\b", regex::escape(t)))
            .collect();
        // Escaped literals always compile.
        let boundary_set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()
            .expect("escaped vocabulary terms are valid patterns");

        Self {
            boundary_terms,
            boundary_set,
            substring_rules,
        }
    }

    /// Extracts the skill set of one posting.
    ///
    /// The text corpus is the title, the description, and every item of
    /// the "Qualifications" highlight section. Other highlight sections
    /// carry too much noise (benefits, culture copy) and are ignored.
    pub fn extract(&self, job: &JobPosting) -> BTreeSet<String> {
        self.extract_from_text(&skill_corpus(job))
    }

    /// Extracts skills from arbitrary text (e.g. a resume body).
    pub fn extract_from_text(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        let mut skills = BTreeSet::new();

        for (pattern, canonical) in &self.substring_rules {
            if lower.contains(pattern.as_str()) {
                skills.insert(canonical.clone());
            }
        }
        for idx in self.boundary_set.matches(&lower) {
            skills.insert(self.boundary_terms[idx].clone());
        }

        skills
    }
}

/// Title + description + "Qualifications" items, space-joined.
fn skill_corpus(job: &JobPosting) -> String {
    let mut corpus = String::new();
    if let Some(title) = &job.title {
        corpus.push_str(title);
        corpus.push(' ');
    }
    if let Some(description) = &job.description {
        corpus.push_str(description);
        corpus.push(' ');
    }
    for item in job.qualification_items() {
        corpus.push_str(item);
        corpus.push(' ');
    }
    corpus
}
