//! Years-of-experience and seniority extraction from posting text.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

/// Seniority tier of a role or candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
}

impl SeniorityLevel {
    /// Maps a candidate's own years to a tier.
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=2 => SeniorityLevel::Junior,
            3..=4 => SeniorityLevel::Mid,
            _ => SeniorityLevel::Senior,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::Mid => "mid",
            SeniorityLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experience requirement derived from one posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub min_years: Option<u32>,
    pub max_years: Option<u32>,
    pub level: SeniorityLevel,
}

impl Default for ExperienceRequirement {
    fn default() -> Self {
        Self {
            min_years: None,
            max_years: None,
            level: SeniorityLevel::Mid,
        }
    }
}

// Postings phrase years requirements loosely ("5+ years of Python and AWS
// experience"), so the single-value and range tails tolerate a few
// intervening words before the experience keyword.
const TAIL: &str =
    r"(?:of\s+)?(?:[\w+#./&-]+\s+){0,3}(?:experience|professional|software|development|engineering)";

lazy_static! {
    // "5+ years of experience", "3 years of Python development"
    static ref SINGLE_YEARS_RE: Regex =
        Regex::new(&format!(r"(?i)(\d+)\+?\s*years?\s*{TAIL}")).unwrap();
    // "3-5 years experience"
    static ref DASH_RANGE_RE: Regex =
        Regex::new(&format!(r"(?i)(\d+)\s*-\s*(\d+)\s*years?\s*{TAIL}")).unwrap();
    // "3 to 5 years experience"
    static ref TO_RANGE_RE: Regex =
        Regex::new(&format!(r"(?i)(\d+)\s*to\s*(\d+)\s*years?\s*{TAIL}")).unwrap();
    // "4+ years relevant experience"
    static ref QUALIFIED_YEARS_RE: Regex = Regex::new(
        r"(?i)(\d+)\+?\s*years?\s*(?:relevant|relative|software|development|engineering)\s*experience"
    )
    .unwrap();
    // "5-8+ years experience"
    static ref DASH_RANGE_PLUS_RE: Regex =
        Regex::new(r"(?i)(\d+)\s*-\s*(\d+)\+?\s*years?\s*(?:of\s+)?experience").unwrap();
}

const JUNIOR_KEYWORDS: &[&str] = &["junior", "entry", "associate", "intern"];
const SENIOR_KEYWORDS: &[&str] = &["senior", "staff", "principal", "lead"];

/// Derives the experience requirement of one posting.
///
/// The corpus is the description plus the "Qualifications" items; the
/// title is deliberately excluded so a "Senior Engineer" heading does not
/// force the tier when the body says otherwise.
pub fn extract_experience_requirement(job: &JobPosting) -> ExperienceRequirement {
    let corpus = experience_corpus(job);
    let (min_years, max_years) = scan_years_span(&corpus);

    // Years first, keywords last: an explicit "junior"/"senior" mention in
    // the body overrides the numeric inference, and the senior scan runs
    // after the junior one.
    let mut level = SeniorityLevel::Mid;
    if let Some(min) = min_years {
        if min <= 2 {
            level = SeniorityLevel::Junior;
        } else if min >= 5 {
            level = SeniorityLevel::Senior;
        }
    }
    let lower = corpus.to_lowercase();
    if JUNIOR_KEYWORDS.iter().any(|k| lower.contains(k)) {
        level = SeniorityLevel::Junior;
    }
    if SENIOR_KEYWORDS.iter().any(|k| lower.contains(k)) {
        level = SeniorityLevel::Senior;
    }

    ExperienceRequirement {
        min_years,
        max_years,
        level,
    }
}

/// Runs every pattern over the text; all matches feed the trackers.
///
/// A one-group match updates both trackers with its value; a two-group
/// match treats the first group as floor and the second as ceiling. The
/// result is the widest span seen anywhere in the text.
pub(crate) fn scan_years_span(text: &str) -> (Option<u32>, Option<u32>) {
    let mut min_years: Option<u32> = None;
    let mut max_years: Option<u32> = None;

    let mut update = |lo: u32, hi: u32| {
        min_years = Some(min_years.map_or(lo, |m| m.min(lo)));
        max_years = Some(max_years.map_or(hi, |m| m.max(hi)));
    };

    let patterns: [&Regex; 5] = [
        &SINGLE_YEARS_RE,
        &DASH_RANGE_RE,
        &TO_RANGE_RE,
        &QUALIFIED_YEARS_RE,
        &DASH_RANGE_PLUS_RE,
    ];
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let first = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let second = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
            match (first, second) {
                (Some(lo), Some(hi)) => update(lo, hi),
                (Some(v), None) => update(v, v),
                _ => {}
            }
        }
    }

    (min_years, max_years)
}

/// Description + "Qualifications" items, original casing (the patterns
/// carry their own case-insensitivity; the keyword scan lowers a copy).
fn experience_corpus(job: &JobPosting) -> String {
    let mut corpus = String::new();
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
