//! Resume keyword scoring — maps resume text to a 0–100 fit score plus the
//! list of matched skills.
//!
//! Deliberately substring-based, unlike the sentiment lexicon: multi-word
//! skills such as "machine learning" need to match across a space, so no
//! word-boundary anchoring is applied here. That means "api" also matches
//! inside "rapid" — accepted behavior, pinned by tests.

use serde::{Deserialize, Serialize};

/// Every matched skill adds `weight * MATCH_MULTIPLIER` on top of the base.
const BASE_SCORE: f64 = 30.0;
const MATCH_MULTIPLIER: f64 = 5.0;

/// Final score bounds: a resume never scores below the base, and never above
/// 95 no matter how many skills match (clamp, not scale).
const MIN_SCORE: u32 = 30;
const MAX_SCORE: u32 = 95;

/// Skill keywords and their weights, in scoring order. Matched keywords are
/// reported in this order, not in order of appearance in the resume.
const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("python", 1.5),
    ("javascript", 1.5),
    ("machine learning", 2.0),
    ("react", 1.2),
    ("sql", 1.3),
    ("cloud", 1.4),
    ("agile", 1.1),
    ("docker", 1.3),
    ("api", 1.2),
    ("git", 1.1),
];

/// Result of scoring one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

/// Immutable, ordered skill/weight table. Built once at startup and shared
/// through `AppState`; never re-literaled per call.
pub struct SkillTable {
    entries: Vec<(String, f64)>,
}

impl SkillTable {
    pub fn builtin() -> Self {
        Self {
            entries: SKILL_WEIGHTS
                .iter()
                .map(|(kw, w)| (kw.to_string(), *w))
                .collect(),
        }
    }

    /// Scores a resume. Total and deterministic: any text, including the
    /// empty string, produces a report. Monotonic non-decreasing in the
    /// number of distinct matched skills until the cap.
    pub fn score(&self, resume_text: &str) -> ScreeningReport {
        let lowered = resume_text.to_lowercase();

        let mut raw = BASE_SCORE;
        let mut matched_keywords = Vec::new();

        for (keyword, weight) in &self.entries {
            if lowered.contains(keyword.as_str()) {
                raw += weight * MATCH_MULTIPLIER;
                matched_keywords.push(keyword.clone());
            }
        }

        let score = (raw.round() as i64).clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u32;

        ScreeningReport {
            score,
            matched_keywords,
        }
    }
}

/// Builds the reviewer-facing analysis summary for a screened candidate.
pub fn build_summary(candidate_name: &str, report: &ScreeningReport) -> String {
    let mut summary = format!(
        "Based on our analysis, {candidate_name} has relevant experience for this position. "
    );

    if !report.matched_keywords.is_empty() {
        let top: Vec<&str> = report
            .matched_keywords
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        summary.push_str(&format!(
            "The resume shows strong skills in {}. ",
            top.join(", ")
        ));
    }

    if report.score > 80 {
        summary.push_str("This candidate is highly recommended for the next interview round.");
    } else if report.score > 60 {
        summary.push_str("This candidate meets the basic requirements and could be considered.");
    } else {
        summary.push_str("This candidate may not be the best fit based on the resume alone.");
    }

    summary
}
