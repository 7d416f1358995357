//! Opportunity score assembly

use crate::Difficulty;

use super::engine::Signals;

const BASE_SCORE: f64 = 52.0;
const MIN_SCORE: f64 = 18.0;
const MAX_SCORE: f64 = 98.0;

/// Points per keyword, capped at `KEYWORD_POINTS_CAP`
const POINTS_PER_KEYWORD: f64 = 4.5;
const KEYWORD_POINTS_CAP: f64 = 18.0;

const SHORT_DOMAIN_MAX: usize = 18;
const MEDIUM_DOMAIN_MAX: usize = 28;
const SHORT_DOMAIN_POINTS: f64 = 9.0;
const MEDIUM_DOMAIN_POINTS: f64 = 4.0;
const LONG_DOMAIN_POINTS: f64 = -5.0;

const LOW_SIMILARITY_MAX: f64 = 0.35;
const MEDIUM_SIMILARITY_MAX: f64 = 0.55;
const LOW_SIMILARITY_POINTS: f64 = 8.0;
const MEDIUM_SIMILARITY_POINTS: f64 = 3.0;
const HIGH_SIMILARITY_POINTS: f64 = -4.0;

/// Calculator for the opportunity score
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Sum all terms onto the base, round half away from zero, clamp to 18-98
    pub fn assemble(signals: &Signals) -> u8 {
        let raw = BASE_SCORE
            + Self::keyword_points(signals.keyword_count)
            + Self::domain_points(signals.domain_length)
            + Self::similarity_points(signals.similarity)
            + signals.audience_focus * 100.0;

        raw.round().clamp(MIN_SCORE, MAX_SCORE) as u8
    }

    pub fn keyword_points(keyword_count: usize) -> f64 {
        (keyword_count as f64 * POINTS_PER_KEYWORD).min(KEYWORD_POINTS_CAP)
    }

    pub fn domain_points(domain_length: usize) -> f64 {
        if domain_length < SHORT_DOMAIN_MAX {
            SHORT_DOMAIN_POINTS
        } else if domain_length < MEDIUM_DOMAIN_MAX {
            MEDIUM_DOMAIN_POINTS
        } else {
            LONG_DOMAIN_POINTS
        }
    }

    pub fn similarity_points(similarity: f64) -> f64 {
        if similarity < LOW_SIMILARITY_MAX {
            LOW_SIMILARITY_POINTS
        } else if similarity < MEDIUM_SIMILARITY_MAX {
            MEDIUM_SIMILARITY_POINTS
        } else {
            HIGH_SIMILARITY_POINTS
        }
    }

    /// Get a description of the difficulty
    pub fn difficulty_description(difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Baja => "Oportunidad clara: el nicho admite escalar rápido con quick wins",
            Difficulty::Media => "Competencia moderada: combina sprints técnicos y de contenido",
            Difficulty::Alta => "Nicho competido: prioriza autoridad y diferenciación antes de escalar",
        }
    }
}
