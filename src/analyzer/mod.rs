//! Analyzer module - opportunity scoring engine

pub mod engine;
pub mod recommendations;
pub mod scoring;
pub mod similarity;

pub use engine::{ScoreEngine, Signals};
pub use scoring::ScoreCalculator;
pub use similarity::similarity_score;
