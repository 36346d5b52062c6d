//! Static skill vocabulary for the extractor.
//!
//! A fixed table of canonical technology terms, grouped by category. The
//! extractor recognizes nothing outside this table: unknown technologies
//! are invisible to it. That is an intentional precision/recall trade,
//! not a bug; extend the table to widen coverage.
//!
//! Terms made only of word characters are matched with word boundaries.
//! Terms containing anything else (punctuation, spaces) cannot be safely
//! wrapped in `\b` anchors, so they are matched by plain lower-cased
//! substring search instead. Alias spellings ("cpp", "c plus plus") map
//! to their canonical term and are always substring-matched.

/// Canonical skill terms, all lower-case.
pub const TECH_SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node.js",
    "nodejs",
    "swift",
    "objective-c",
    "kotlin",
    "golang",
    "go",
    "c++",
    "c#",
    "php",
    "rust",
    "ruby",
    "perl",
    "scala",
    "r",
    "matlab",
    // Cloud & infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ci/cd",
    "jenkins",
    "ansible",
    "puppet",
    "chef",
    "vagrant",
    // Databases
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "cassandra",
    "dynamodb",
    "oracle",
    "sqlite",
    "elasticsearch",
    // APIs & services
    "restful",
    "api",
    "graphql",
    "microservices",
    "soap",
    "grpc",
    // ML/AI
    "machine learning",
    "ml",
    "ai",
    "tensorflow",
    "pytorch",
    "keras",
    "deep learning",
    "neural networks",
    "nlp",
    "computer vision",
    // Mobile & web
    "ios",
    "android",
    "mobile",
    "web",
    "frontend",
    "backend",
    "full stack",
    "html",
    "css",
    "angular",
    "vue",
    "next.js",
    "svelte",
    // Methodologies
    "agile",
    "scrum",
    "kanban",
    "devops",
    "git",
    "github",
    "gitlab",
    // IDEs & tools
    "xcode",
    "android studio",
    "ide",
    "visual studio",
    "eclipse",
    // Operating systems
    "linux",
    "unix",
    "windows",
    "macos",
    // Data engineering
    "data engineering",
    "etl",
    "spark",
    "hadoop",
    "kafka",
    "snowflake",
    "clickhouse",
    "data pipeline",
    "airflow",
    // Security & networking
    "ssl",
    "tls",
    "openssl",
    "cryptography",
    "security",
    "network programming",
    "networking",
    "tcp/ip",
    "http",
    "https",
    // Frameworks
    "spring",
    "django",
    "flask",
    "express",
    "nestjs",
    "fastapi",
    "laravel",
    "rails",
    "asp.net",
    // Servers
    "nginx",
    "apache",
    "tomcat",
    "iis",
];

/// Alternate spellings, mapped to their canonical vocabulary term.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("cpp", "c++"),
    ("c plus plus", "c++"),
    ("cplusplus", "c++"),
];

/// The vocabulary the extractor is built from. Read-only after
/// construction; swap the table to retarget the extractor (tests do).
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
    aliases: Vec<(String, String)>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(
            TECH_SKILL_VOCABULARY.iter().map(|s| s.to_string()),
            SKILL_ALIASES
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string())),
        )
    }
}

impl SkillVocabulary {
    pub fn new(
        terms: impl IntoIterator<Item = String>,
        aliases: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            terms: terms.into_iter().map(|t| t.to_lowercase()).collect(),
            aliases: aliases
                .into_iter()
                .map(|(a, c)| (a.to_lowercase(), c.to_lowercase()))
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Splits the table into boundary-safe terms and substring rules.
    ///
    /// Returns `(boundary_terms, substring_rules)` where each substring
    /// rule is `(pattern, canonical_term)`. Aliases are always substring
    /// rules; so is any term containing a non-word character.
    pub(crate) fn partition(&self) -> (Vec<String>, Vec<(String, String)>) {
        let mut boundary = Vec::new();
        let mut substring = Vec::new();

        for term in &self.terms {
            if term.chars().all(is_word_char) {
                boundary.push(term.clone());
            } else {
                substring.push((term.clone(), term.clone()));
            }
        }
        for (alias, canonical) in &self.aliases {
            substring.push((alias.clone(), canonical.clone()));
        }

        (boundary, substring)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_terms_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for term in TECH_SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase(), "term not lowercase: {term}");
            assert!(seen.insert(*term), "duplicate term: {term}");
        }
    }

    #[test]
    fn test_partition_routes_punctuated_terms_to_substring() {
        let (boundary, substring) = SkillVocabulary::default().partition();

        assert!(boundary.iter().any(|t| t == "python"));
        assert!(!boundary.iter().any(|t| t == "c++"));

        let substring_patterns: Vec<&str> =
            substring.iter().map(|(p, _)| p.as_str()).collect();
        for expected in ["c++", "c#", "ci/cd", "node.js", "tcp/ip", "machine learning"] {
            assert!(
                substring_patterns.contains(&expected),
                "missing substring rule for {expected}"
            );
        }
    }

    #[test]
    fn test_aliases_map_to_canonical_terms() {
        let (_, substring) = SkillVocabulary::default().partition();
        for alias in ["cpp", "c plus plus", "cplusplus"] {
            let rule = substring.iter().find(|(p, _)| p == alias);
            assert_eq!(rule.map(|(_, c)| c.as_str()), Some("c++"));
        }
    }
}
