//! Analysis engine - derives signals and assembles the result

use crate::{AnalysisInput, AnalysisResult, Difficulty};

use super::recommendations::{projections, quick_wins, roadmap};
use super::similarity::{similarity_score, strip_scheme};
use super::ScoreCalculator;

/// Similarity assumed when either domain or competitor is missing
pub const DEFAULT_SIMILARITY: f64 = 0.20;

/// Audience descriptions longer than this count as focused
const FOCUSED_AUDIENCE_MIN_LEN: usize = 40;
const FOCUSED_AUDIENCE: f64 = 0.12;
const BROAD_AUDIENCE: f64 = 0.06;

/// Intermediate signals every score term and recommendation is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Number of non-empty comma-separated keywords
    pub keyword_count: usize,
    /// Domain length in characters, scheme excluded
    pub domain_length: usize,
    /// Positional similarity against the competitor (0.0-1.0)
    pub similarity: f64,
    pub audience_focus: f64,
}

impl Signals {
    pub fn from_input(input: &AnalysisInput) -> Self {
        let similarity = if input.competitor.is_empty() || input.domain.is_empty() {
            DEFAULT_SIMILARITY
        } else {
            similarity_score(&input.domain, &input.competitor)
        };

        let audience_focus = if input.audience.chars().count() > FOCUSED_AUDIENCE_MIN_LEN {
            FOCUSED_AUDIENCE
        } else {
            BROAD_AUDIENCE
        };

        Self {
            keyword_count: input.keyword_list().len(),
            domain_length: strip_scheme(&input.domain).chars().count(),
            similarity,
            audience_focus,
        }
    }
}

/// Stateless engine: identical input always yields an identical result
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
        let signals = Signals::from_input(input);
        Self::analyze_signals(&signals)
    }

    /// Build the full result from precomputed signals
    pub fn analyze_signals(signals: &Signals) -> AnalysisResult {
        let score = ScoreCalculator::assemble(signals);

        AnalysisResult {
            score,
            difficulty: Difficulty::from_score(score),
            quick_wins: quick_wins(signals),
            roadmap: roadmap(signals),
            projections: projections(score, signals),
        }
    }
}
