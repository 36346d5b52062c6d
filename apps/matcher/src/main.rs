use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::ingest;
use matcher::matching::rank::{rank_jobs, MatchSummary, MatchedJob};
use matcher::matching::scoring::CompatibilityScorer;
use matcher::matching::skills::SkillExtractor;
use matcher::models::CandidateProfile;
use matcher::resume;

/// Rank a batch of job postings against a candidate profile.
#[derive(Debug, Parser)]
#[command(name = "matcher", version, about)]
struct Cli {
    /// Provider response JSON: a bare array of postings or an envelope
    /// with a `jobs_results` key.
    #[arg(long)]
    jobs: PathBuf,

    /// Candidate profile JSON (skills, experience_years, location,
    /// job_title).
    #[arg(long, conflicts_with = "resume")]
    profile: Option<PathBuf>,

    /// Resume PDF to derive the profile from instead.
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Candidate location; overrides the profile's.
    #[arg(long)]
    location: Option<String>,

    /// Candidate experience in years; overrides the profile's.
    #[arg(long)]
    experience_years: Option<u32>,

    /// Keep only the first N postings after deduplication.
    #[arg(long)]
    max_jobs: Option<usize>,

    /// Print the search-query variants for this profile and exit.
    #[arg(long)]
    print_queries: bool,
}

/// JSON envelope printed to stdout.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated_at: DateTime<Utc>,
    user_profile: &'a CandidateProfile,
    total_jobs_found: usize,
    summary: MatchSummary,
    matched_jobs: Vec<MatchedJob>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let scorer = CompatibilityScorer::new();
    let profile = load_profile(&cli, &config, scorer.extractor())?;

    if cli.print_queries {
        let title = profile.job_title.as_deref().unwrap_or("Software Engineer");
        for query in ingest::generate_search_queries(title, &profile.skills) {
            println!("{query}");
        }
        return Ok(());
    }

    let jobs = ingest::load_jobs(&cli.jobs)?;
    let fetched = jobs.len();
    let jobs = ingest::dedup_jobs(jobs);
    let unique = jobs.len();
    let jobs = ingest::cap_jobs(jobs, cli.max_jobs.or(config.max_jobs));
    info!(
        "Matching {} postings ({fetched} fetched, {unique} unique)",
        jobs.len()
    );

    let matched_jobs = rank_jobs(&scorer, &jobs, &profile);
    let summary = MatchSummary::from_matches(&matched_jobs);

    let report = RunReport {
        generated_at: Utc::now(),
        user_profile: &profile,
        total_jobs_found: jobs.len(),
        summary,
        matched_jobs,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn load_profile(cli: &Cli, config: &Config, extractor: &SkillExtractor) -> Result<CandidateProfile> {
    let mut profile = if let Some(path) = &cli.profile {
        serde_json::from_str(&fs::read_to_string(path)?)?
    } else if let Some(path) = &cli.resume {
        info!("Deriving profile from resume {}", path.display());
        let text = resume::extract_resume_text(path)?;
        resume::profile_from_resume_text(&text, extractor)
    } else {
        bail!("either --profile or --resume is required");
    };

    if let Some(years) = cli.experience_years {
        profile.experience_years = years;
    }
    if cli.location.is_some() {
        profile.location = cli.location.clone();
    } else if profile.location.is_none() {
        profile.location = config.default_location.clone();
    }

    Ok(profile)
}
